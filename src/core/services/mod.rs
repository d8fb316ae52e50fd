pub mod credential_decoder;
pub mod env_resolver;
