use serde::{Deserialize, Serialize};

/// Placeholder substituted with the normalized postal code when building a
/// request URL from a descriptor's pattern.
pub const ZIPCODE_PLACEHOLDER: &str = ":zipcode";

/// Decoded provider payload. Each remote service returns a different,
/// uncontrolled shape (some signal "not found" with `{"erro": true}`, others
/// with a structured 404-style body), so no fixed schema is imposed.
pub type AddressResult = serde_json::Value;

/// The empty outcome returned when the normalized code has no digits.
pub fn empty_result() -> AddressResult {
    AddressResult::Object(serde_json::Map::new())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Per-service transport variation: method and extra request headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransportOptions {
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(default)]
    pub headers: Vec<(String, String)>,
}

impl TransportOptions {
    pub fn with_header(name: &str, value: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            headers: vec![(name.to_string(), value.to_string())],
        }
    }
}

/// Static record describing how to build a request to one remote lookup
/// provider. Defined at registry construction and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub id: String,
    /// URL with a `:zipcode` placeholder, e.g. `https://viacep.com.br/ws/:zipcode/json`.
    pub url_pattern: String,
    #[serde(default)]
    pub transport: TransportOptions,
}

impl ServiceDescriptor {
    pub fn new(id: &str, url_pattern: &str) -> Self {
        Self {
            id: id.to_string(),
            url_pattern: url_pattern.to_string(),
            transport: TransportOptions::default(),
        }
    }

    pub fn with_transport(id: &str, url_pattern: &str, transport: TransportOptions) -> Self {
        Self {
            id: id.to_string(),
            url_pattern: url_pattern.to_string(),
            transport,
        }
    }

    /// Literal substitution of the placeholder with the normalized code.
    pub fn request_url(&self, code: &PostalCode) -> String {
        self.url_pattern.replace(ZIPCODE_PLACEHOLDER, code.as_str())
    }
}

/// A postal code normalized to ASCII digits only. May be empty when the raw
/// input contained no digits at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(String);

impl PostalCode {
    /// Strips every character that is not an ASCII digit.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.chars().filter(|c| c.is_ascii_digit()).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_non_digits() {
        assert_eq!(PostalCode::normalize("0247-3090").as_str(), "02473090");
        assert_eq!(
            PostalCode::normalize("0247-3090"),
            PostalCode::normalize("02473090")
        );
        assert_eq!(PostalCode::normalize(" 01.310-100 ").as_str(), "01310100");
    }

    #[test]
    fn test_normalize_digitless_input_is_empty() {
        assert!(PostalCode::normalize("abcdefghik").is_empty());
        assert!(PostalCode::normalize("").is_empty());
        assert!(PostalCode::normalize("--- ---").is_empty());
    }

    #[test]
    fn test_request_url_substitution() {
        let descriptor = ServiceDescriptor::new("viacep", "https://viacep.com.br/ws/:zipcode/json");
        let code = PostalCode::normalize("02473-090");
        assert_eq!(
            descriptor.request_url(&code),
            "https://viacep.com.br/ws/02473090/json"
        );
    }
}
