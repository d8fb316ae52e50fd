use std::time::Duration;

use crate::config::pose_config::RemoteBackend;
use crate::core::errors::{PoseError, Result};
use crate::core::models::secret_object::{SecretList, SecretObject};
use crate::core::traits::secret_store::SecretStore;

/// Reads secrets through the cluster REST API
/// (`GET /api/v1/namespaces/{ns}/secrets`).
///
/// Each call runs on its own single-threaded runtime, so the client can be
/// used from plain synchronous code. Requests are attempted once; there
/// is no retry.
pub struct OpenShiftClient {
    scheme: &'static str,
    timeout: Option<Duration>,
}

impl OpenShiftClient {
    /// Create a client. `timeout` bounds each request; `None` waits as long
    /// as the server takes.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            scheme: "https",
            timeout,
        }
    }

    /// `{scheme}://{endpoint}/api/v1/namespaces/{namespace}/secrets`, with
    /// the namespace percent-encoded as a single path segment.
    fn secrets_url(&self, backend: &RemoteBackend) -> Result<reqwest::Url> {
        let invalid = |reason: String| PoseError::Network {
            endpoint: backend.endpoint.clone(),
            reason,
        };

        let mut url = reqwest::Url::parse(&format!("{}://{}/", self.scheme, backend.endpoint))
            .map_err(|e| invalid(format!("invalid endpoint: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| invalid("endpoint cannot carry a path".into()))?
            .pop_if_empty()
            .extend(["api", "v1", "namespaces", backend.namespace.as_str(), "secrets"]);
        Ok(url)
    }

    fn build_client(&self, endpoint: &str) -> Result<reqwest::Client> {
        let mut builder =
            reqwest::Client::builder().user_agent(format!("pose/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(|e| PoseError::Network {
            endpoint: endpoint.to_string(),
            reason: format!("Failed to create HTTP client: {e}"),
        })
    }
}

/// Join all selector entries into one `fieldSelector` value.
///
/// Entries are comma-separated, which the API treats as a conjunction:
/// `{metadata.name: db, type: Opaque}` → `metadata.name=db,type=Opaque`.
/// Returns `None` when there is nothing to filter on.
pub fn field_selector(backend: &RemoteBackend) -> Option<String> {
    if backend.field_selector.is_empty() {
        return None;
    }
    Some(
        backend
            .field_selector
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(","),
    )
}

impl SecretStore for OpenShiftClient {
    fn fetch_secrets(&self, backend: &RemoteBackend, token: &str) -> Result<Vec<SecretObject>> {
        let endpoint = backend.endpoint.as_str();
        let network = |reason: String| PoseError::Network {
            endpoint: endpoint.to_string(),
            reason,
        };

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| network(format!("Failed to create async runtime: {e}")))?;

        let url = self.secrets_url(backend)?;
        tracing::debug!(%url, "requesting secrets");

        rt.block_on(async {
            let client = self.build_client(endpoint)?;
            let mut request = client.get(url).bearer_auth(token);
            if let Some(selector) = field_selector(backend) {
                request = request.query(&[("fieldSelector", selector)]);
            }

            let resp = request.send().await.map_err(|e| network(e.to_string()))?;

            if !resp.status().is_success() {
                return Err(network(format!("server returned status {}", resp.status())));
            }

            let list: SecretList = resp.json().await.map_err(|e| {
                if e.is_decode() {
                    PoseError::Decode {
                        endpoint: endpoint.to_string(),
                        reason: e.to_string(),
                    }
                } else {
                    network(format!("Failed to read response: {e}"))
                }
            })?;

            Ok(list.into_objects())
        })
    }
}
