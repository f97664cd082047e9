use crate::core::registry::{Registry, DEFAULT_SERVICE};
use crate::domain::model::{empty_result, AddressResult, PostalCode};
use crate::domain::ports::Transport;
use crate::utils::error::{CepError, Result};

/// Orchestrates one address lookup: validate the service, normalize the code,
/// build the URL, fetch, decode. The decoded payload is passed through
/// verbatim; found/not-found is whatever shape the provider returned.
pub struct Lookup<T: Transport> {
    registry: Registry,
    transport: T,
}

impl<T: Transport> Lookup<T> {
    /// Lookup against the builtin provider table.
    pub fn new(transport: T) -> Self {
        Self {
            registry: Registry::shared().clone(),
            transport,
        }
    }

    pub fn with_registry(transport: T, registry: Registry) -> Self {
        Self { registry, transport }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Looks up `raw_input` against the default service.
    pub async fn address_by_zip_code(&self, raw_input: &str) -> Result<AddressResult> {
        self.address_by_zip_code_via(raw_input, DEFAULT_SERVICE).await
    }

    /// Looks up `raw_input` against the named service. The service id is
    /// checked first; a raw input with no digits then short-circuits to an
    /// empty object without touching the network.
    pub async fn address_by_zip_code_via(
        &self,
        raw_input: &str,
        service_id: &str,
    ) -> Result<AddressResult> {
        if !self.registry.is_valid(service_id) {
            return Err(CepError::InvalidService {
                requested: service_id.to_string(),
                valid: self.registry.service_ids().join(", "),
            });
        }

        let code = PostalCode::normalize(raw_input);
        if code.is_empty() {
            tracing::debug!(raw_input, "no digits in input, skipping request");
            return Ok(empty_result());
        }

        let descriptor = self.registry.resolve(service_id)?;
        let url = descriptor.request_url(&code);

        tracing::debug!(service = service_id, %url, "querying provider");
        let body = self.transport.fetch(&url, &descriptor.transport).await?;
        tracing::debug!(service = service_id, bytes = body.len(), "provider responded");

        let address = serde_json::from_str(&body)?;
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ServiceDescriptor, TransportOptions};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every fetch and replays a canned body.
    struct RecordingTransport {
        body: String,
        requests: Mutex<Vec<(String, TransportOptions)>>,
    }

    impl RecordingTransport {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<(String, TransportOptions)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn fetch(&self, url: &str, options: &TransportOptions) -> Result<String> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), options.clone()));
            Ok(self.body.clone())
        }
    }

    #[tokio::test]
    async fn test_requested_url_is_pattern_with_code_substituted() {
        let transport = RecordingTransport::new(r#"{"cep": "02473-090"}"#);
        let lookup = Lookup::new(transport);

        lookup
            .address_by_zip_code_via("0247-3090", "viacep")
            .await
            .unwrap();

        let requests = lookup.transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "https://viacep.com.br/ws/02473090/json");
    }

    #[tokio::test]
    async fn test_descriptor_headers_reach_the_transport() {
        let transport = RecordingTransport::new("{}");
        let lookup = Lookup::new(transport);

        lookup
            .address_by_zip_code_via("02473090", "cepla")
            .await
            .unwrap();

        let requests = lookup.transport.requests();
        assert_eq!(requests[0].0, "http://cep.la/02473090");
        assert_eq!(
            requests[0].1.headers,
            vec![("Accept".to_string(), "application/json".to_string())]
        );
    }

    #[tokio::test]
    async fn test_digitless_input_yields_empty_object_without_fetching() {
        let transport = RecordingTransport::new(r#"{"should": "never be fetched"}"#);
        let lookup = Lookup::new(transport);

        for service in ["viacep", "cepla", "apicep"] {
            let result = lookup
                .address_by_zip_code_via("abcdefghik", service)
                .await
                .unwrap();
            assert_eq!(result, json!({}));
        }

        assert!(lookup.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_service_fails_before_code_normalization() {
        let transport = RecordingTransport::new("{}");
        let lookup = Lookup::new(transport);

        // Even a digitless code must report the bad service, not an empty result.
        for raw in ["02473090", "abcdefghik", ""] {
            let err = lookup.address_by_zip_code_via(raw, "cepi").await.unwrap_err();
            match err {
                CepError::InvalidService { requested, valid } => {
                    assert_eq!(requested, "cepi");
                    assert_eq!(valid, "apicep, cepla, viacep");
                }
                other => panic!("expected InvalidService, got {:?}", other),
            }
        }

        assert!(lookup.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_payload_is_passed_through_verbatim() {
        let transport = RecordingTransport::new(r#"{"erro": true}"#);
        let lookup = Lookup::new(transport);

        let result = lookup.address_by_zip_code("01234567").await.unwrap();
        assert_eq!(result, json!({"erro": true}));
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_decode_error() {
        let transport = RecordingTransport::new("<html>gateway timeout</html>");
        let lookup = Lookup::new(transport);

        let err = lookup.address_by_zip_code("02473090").await.unwrap_err();
        assert!(matches!(err, CepError::Decode(_)));
    }

    #[tokio::test]
    async fn test_custom_registry() {
        let registry = Registry::from_descriptors(vec![ServiceDescriptor::new(
            "local",
            "https://cep.internal/:zipcode",
        )])
        .unwrap();
        let transport = RecordingTransport::new(r#"{"uf": "SP"}"#);
        let lookup = Lookup::with_registry(transport, registry);

        let result = lookup
            .address_by_zip_code_via("02473090", "local")
            .await
            .unwrap();
        assert_eq!(result, json!({"uf": "SP"}));
        assert_eq!(
            lookup.transport.requests()[0].0,
            "https://cep.internal/02473090"
        );
    }
}
