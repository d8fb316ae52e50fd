use std::ffi::OsString;
use std::time::Duration;

use crate::adapters::auth;
use crate::adapters::launcher::compose::Launcher;
use crate::adapters::secret_store::openshift_client::OpenShiftClient;
use crate::cli::context;
use crate::config::pose_config::PoseConfig;
use crate::core::errors::Result;
use crate::core::services::env_resolver::EnvResolver;

/// Execute one resolve-then-launch cycle.
///
/// Loads the config for the current project, resolves its environment
/// and only then starts the downstream tool. Any failure before launch
/// aborts without spawning anything. Returns the exit code to propagate.
pub fn execute(args: &[OsString]) -> Result<i32> {
    let config_path = context::config_path()?;
    let project_key = context::project_key()?;

    let config = PoseConfig::load(&config_path)?;
    let settings = config.settings.clone();
    let project = config.into_project(&project_key);

    tracing::info!(
        project = %project_key,
        config = %config_path.display(),
        inline = project.inline.len(),
        backends = project.remote_backends.len(),
        "loaded project config"
    );

    let tokens = auth::from_settings(&settings);
    let store = OpenShiftClient::new(settings.timeout_secs.map(Duration::from_secs));
    let env = EnvResolver::new(tokens.as_ref(), &store).resolve(&project)?;

    if env.is_empty() {
        tracing::debug!(project = %project_key, "no variables configured for project");
    } else {
        tracing::info!(vars = ?env.names(), "resolved environment");
    }

    Launcher::new(settings.command).launch(env, args)
}
