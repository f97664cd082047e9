use crate::domain::model::TransportOptions;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound HTTP collaborator. The lookup core only needs the raw response
/// body; status classification and found/not-found interpretation are left to
/// the remote payload itself, so implementations must return the body even for
/// non-2xx responses that carried one.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str, options: &TransportOptions) -> Result<String>;
}
