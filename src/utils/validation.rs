use crate::domain::model::{ServiceDescriptor, ZIPCODE_PLACEHOLDER};
use crate::utils::error::{CepError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CepError::Config {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_url_pattern(field_name: &str, pattern: &str) -> Result<()> {
    if !pattern.contains(ZIPCODE_PLACEHOLDER) {
        return Err(CepError::Config {
            message: format!(
                "{} must contain the '{}' placeholder: {}",
                field_name, ZIPCODE_PLACEHOLDER, pattern
            ),
        });
    }

    match Url::parse(pattern) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CepError::Config {
                message: format!("{} has unsupported URL scheme: {}", field_name, scheme),
            }),
        },
        Err(e) => Err(CepError::Config {
            message: format!("{} is not a valid URL: {}", field_name, e),
        }),
    }
}

impl Validate for ServiceDescriptor {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("service id", &self.id)?;
        validate_url_pattern("url_pattern", &self.url_pattern)?;
        Ok(())
    }
}
