use crate::config::pose_config::RemoteBackend;
use crate::core::errors::Result;
use crate::core::models::secret_object::SecretObject;

/// Port for reading secret objects from a remote store.
pub trait SecretStore {
    /// List the secret objects visible in `backend`'s namespace,
    /// narrowed by its field selector.
    fn fetch_secrets(&self, backend: &RemoteBackend, token: &str) -> Result<Vec<SecretObject>>;
}
