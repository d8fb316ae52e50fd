use crate::config::pose_config::{ProjectConfig, RemoteBackend};
use crate::core::errors::Result;
use crate::core::models::environment::EnvironmentMap;
use crate::core::models::secret_object::SecretObject;
use crate::core::services::credential_decoder;
use crate::core::traits::secret_store::SecretStore;
use crate::core::traits::token_source::{Session, TokenSource};

/// Merges a project's inline values and remote secrets into one
/// environment.
///
/// Layers are applied base to top: inline values first, then each
/// remote backend in declared order. A later layer always wins on a
/// name collision.
pub struct EnvResolver<'a> {
    tokens: &'a dyn TokenSource,
    store: &'a dyn SecretStore,
}

impl<'a> EnvResolver<'a> {
    pub fn new(tokens: &'a dyn TokenSource, store: &'a dyn SecretStore) -> Self {
        Self { tokens, store }
    }

    /// Resolve the full environment for `config`.
    ///
    /// Credentials are acquired lazily, once, and only if the project has
    /// at least one remote backend.
    ///
    /// # Errors
    ///
    /// Any auth, network or decode failure from a backend aborts the
    /// whole resolve; no partially-resolved map is returned.
    pub fn resolve(&self, config: &ProjectConfig) -> Result<EnvironmentMap> {
        let mut env = EnvironmentMap::new();

        for (name, value) in &config.inline {
            env.insert(name.as_str(), value.as_str());
        }

        if config.remote_backends.is_empty() {
            return Ok(env);
        }

        let session = self.tokens.acquire()?;
        tracing::debug!(strategy = self.tokens.name(), "acquired secret store session");

        for backend in &config.remote_backends {
            self.apply_backend(&mut env, backend, session.as_ref())?;
        }

        Ok(env)
    }

    fn apply_backend(
        &self,
        env: &mut EnvironmentMap,
        backend: &RemoteBackend,
        session: &dyn Session,
    ) -> Result<()> {
        let token = session.token_for(&backend.endpoint)?;
        let objects = self.store.fetch_secrets(backend, &token)?;

        tracing::info!(
            endpoint = %backend.endpoint,
            namespace = %backend.namespace,
            count = objects.len(),
            "fetched secret objects"
        );

        for object in &objects {
            Self::apply_object(env, backend, object);
        }
        Ok(())
    }

    /// Copy the mapped fields of one secret object into `env`.
    ///
    /// Objects with no entry in the backend's mapping are skipped. A mapped
    /// field missing from the object decodes to an empty value.
    fn apply_object(env: &mut EnvironmentMap, backend: &RemoteBackend, object: &SecretObject) {
        let Some(fields) = backend.mapping.get(&object.name) else {
            tracing::debug!(secret = %object.name, "secret not mapped, skipping");
            return;
        };

        for (var_name, field_name) in fields {
            let value = credential_decoder::decode(object.field(field_name));
            if env.insert(var_name.as_str(), value).is_some() {
                tracing::debug!(var = %var_name, secret = %object.name, "overriding earlier value");
            }
        }
    }
}
