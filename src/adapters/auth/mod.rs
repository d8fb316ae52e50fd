pub mod cli_runner;
pub mod kubeconfig;
pub mod whoami;

use crate::config::pose_config::{AuthStrategy, Settings};
use crate::core::traits::token_source::TokenSource;

/// Build the token source selected by `settings.auth`.
pub fn from_settings(settings: &Settings) -> Box<dyn TokenSource> {
    match settings.auth {
        AuthStrategy::Whoami => Box::new(whoami::WhoamiToken::new(&settings.cli)),
        AuthStrategy::Kubeconfig => Box::new(kubeconfig::KubeconfigToken::new(&settings.cli)),
    }
}
