pub mod secret_store;
pub mod token_source;
