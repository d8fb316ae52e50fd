use std::path::PathBuf;

/// All domain errors for pose.
///
/// Every variant here is fatal: it aborts the invocation before any
/// variable reaches the downstream tool. Field-level problems (a
/// malformed secret value, a secret object that does not exist yet)
/// are absorbed where they happen and never become a `PoseError`.
#[derive(Debug, thiserror::Error)]
pub enum PoseError {
    #[error(
        "Could not read config file: {path}\n\n  \
         {source}\n\n  \
         Create it with a 'projects:' section, or point POSE_CONFIG at another file."
    )]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Parse error in {path}: {detail}\n\n  \
         Expected format:\n    \
         projects:\n      \
           <project>:\n        \
             inline: {{ NAME: value }}\n        \
             remoteBackends: [ {{ endpoint, namespace, mapping }} ]"
    )]
    ConfigParse { path: PathBuf, detail: String },

    #[error(
        "Could not determine the home directory\n\n  \
         Set HOME, or point POSE_CONFIG at the config file directly."
    )]
    HomeNotFound,

    #[error(
        "Authentication failed: {reason}\n\n  \
         Solutions:\n    \
         → Log in again: oc login <cluster>\n    \
         → Check the secret-store CLI is on PATH (settings.cli in pose-config.yml)"
    )]
    Auth { reason: String },

    #[error("Secret store request to {endpoint} failed: {reason}")]
    Network { endpoint: String, reason: String },

    #[error("Invalid secret store response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    #[error("Failed to run '{command}': {reason}")]
    Launch { command: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PoseError>;
