pub mod environment;
pub mod secret_object;
