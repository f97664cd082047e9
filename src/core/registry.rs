use crate::domain::model::{ServiceDescriptor, TransportOptions};
use crate::utils::error::{CepError, Result};
use crate::utils::validation::Validate;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Service queried when the caller does not pick one explicitly.
pub const DEFAULT_SERVICE: &str = "viacep";

static BUILTIN: LazyLock<Registry> = LazyLock::new(Registry::builtin);

/// Routing table from service id to descriptor. Read-only after
/// construction; the builtin table lives for the whole process.
#[derive(Debug, Clone)]
pub struct Registry {
    services: HashMap<String, ServiceDescriptor>,
}

impl Registry {
    /// Shared table of the known public providers.
    pub fn shared() -> &'static Registry {
        &BUILTIN
    }

    fn builtin() -> Self {
        let descriptors = vec![
            ServiceDescriptor::new("viacep", "https://viacep.com.br/ws/:zipcode/json"),
            ServiceDescriptor::with_transport(
                "cepla",
                "http://cep.la/:zipcode",
                TransportOptions::with_header("Accept", "application/json"),
            ),
            ServiceDescriptor::new("apicep", "https://ws.apicep.com/cep/:zipcode.json"),
        ];

        // Builtin descriptors are compiled in; construction cannot fail.
        Self::from_descriptors(descriptors).expect("builtin descriptors are valid")
    }

    /// Builds a table from caller-supplied descriptors, validating each one
    /// and rejecting duplicate ids.
    pub fn from_descriptors(descriptors: Vec<ServiceDescriptor>) -> Result<Self> {
        let mut services = HashMap::with_capacity(descriptors.len());
        for descriptor in descriptors {
            descriptor.validate()?;
            if services.contains_key(&descriptor.id) {
                return Err(CepError::Config {
                    message: format!("duplicate service id: {}", descriptor.id),
                });
            }
            services.insert(descriptor.id.clone(), descriptor);
        }
        Ok(Self { services })
    }

    /// Registered ids, sorted for stable display.
    pub fn service_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.services.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn is_valid(&self, id: &str) -> bool {
        self.services.contains_key(id)
    }

    pub fn resolve(&self, id: &str) -> Result<&ServiceDescriptor> {
        self.services
            .get(id)
            .ok_or_else(|| CepError::UnknownService(id.to_string()))
    }
}
