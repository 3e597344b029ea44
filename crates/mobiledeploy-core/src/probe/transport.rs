//! HTTP transport seam for the API probe.
//!
//! The probe logic talks to a [`HttpTransport`] trait so tests can inject a
//! recording fake; [`ReqwestTransport`] is the production implementation.

use crate::probe::types::GenerateRequest;
use crate::{DeployError, Result};
use std::time::Duration;
use url::Url;

/// Raw reply from one HTTP exchange, before status classification.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// One-shot JSON POST capability.
pub trait HttpTransport {
    fn post_json(&self, url: &Url, body: &GenerateRequest) -> Result<HttpReply>;
}

/// Blocking reqwest transport with a hard per-request timeout.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mobiledeploy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DeployError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(&self, url: &Url, body: &GenerateRequest) -> Result<HttpReply> {
        let response = self.client.post(url.clone()).json(body).send()?;
        let status = response.status().as_u16();
        // A failure while reading the body is a network error, not an HTTP one
        let body = response.text()?;
        Ok(HttpReply { status, body })
    }
}
