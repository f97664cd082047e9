use crate::domain::model::{HttpMethod, TransportOptions};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Method};

/// `reqwest`-backed transport. Callers wanting timeouts, proxies or custom TLS
/// configure their own client and pass it through `with_client`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn method_for(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str, options: &TransportOptions) -> Result<String> {
        let mut request = self.client.request(method_for(options.method), url);
        for (name, value) in &options.headers {
            request = request.header(name, value);
        }

        let response = request.send().await?;

        // Non-2xx statuses are not failures here: some providers answer a
        // missed lookup with a structured 404 body that the caller still
        // wants decoded.
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "provider returned non-success status");
        }

        let body = response.text().await?;
        Ok(body)
    }
}
