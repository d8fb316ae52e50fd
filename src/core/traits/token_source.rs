use crate::core::errors::Result;

/// Port for obtaining secret-store credentials.
///
/// Implementations live in `adapters::auth` (`WhoamiToken`,
/// `KubeconfigToken`). `acquire` is called at most once per resolve and
/// the returned `Session` is reused for every backend.
pub trait TokenSource {
    /// Run the underlying login/session lookup once.
    fn acquire(&self) -> Result<Box<dyn Session>>;

    /// Human-readable name of this strategy (e.g. "whoami").
    fn name(&self) -> &str;
}

/// Credentials gathered by a `TokenSource`.
pub trait Session {
    /// Bearer token to present to `endpoint`.
    fn token_for(&self, endpoint: &str) -> Result<String>;
}
