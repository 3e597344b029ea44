//! API probe: one bounded request to the hosted text-generation endpoint.
//!
//! Sends exactly one POST and classifies the outcome. There is no retry; a
//! caller that wants another attempt runs the probe again.

pub mod transport;
pub mod types;

pub use transport::{HttpReply, HttpTransport, ReqwestTransport};
pub use types::{GenerateRequest, ProbeResponse};

use crate::config::{NetworkConfig, ProbeConfig};
use crate::{DeployError, Result};
use tracing::debug;
use url::Url;

/// Resolve the API key: an explicit argument wins over the environment
/// variable; both absent or empty is a missing credential.
pub fn resolve_api_key(explicit: Option<&str>) -> Result<String> {
    resolve_from(explicit, std::env::var(NetworkConfig::API_KEY_ENV).ok())
}

fn resolve_from(explicit: Option<&str>, env_value: Option<String>) -> Result<String> {
    if let Some(key) = explicit {
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }
    match env_value {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(DeployError::MissingCredential),
    }
}

/// Send one probe request and classify the outcome.
///
/// An empty `api_key` fails with `MissingCredential` before any network
/// access. A 2xx reply is a [`ProbeResponse`]; any other status is `Http`
/// with the raw error body preserved; transport failures are `Network`.
pub fn probe(
    transport: &dyn HttpTransport,
    config: &ProbeConfig,
    api_key: &str,
) -> Result<ProbeResponse> {
    if api_key.is_empty() {
        return Err(DeployError::MissingCredential);
    }

    let mut url = Url::parse(&config.endpoint_url()).map_err(|e| DeployError::Network {
        message: format!("invalid endpoint URL: {e}"),
    })?;
    url.query_pairs_mut()
        .append_pair(NetworkConfig::KEY_QUERY_PARAM, api_key);

    // Log the endpoint without the key
    debug!("POST {}{}", url.origin().ascii_serialization(), url.path());

    let request = GenerateRequest::from_prompt(&config.prompt);
    let reply = transport.post_json(&url, &request)?;

    if (200..300).contains(&reply.status) {
        Ok(ProbeResponse {
            status_code: reply.status,
            raw_body: reply.body,
        })
    } else {
        Err(DeployError::Http {
            status_code: reply.status,
            body: reply.body,
        })
    }
}
