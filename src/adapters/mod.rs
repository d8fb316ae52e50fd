pub mod auth;
pub mod launcher;
pub mod secret_store;
