use thiserror::Error;

use crate::renderer::mesh::MeshKey;

/// Errors surfaced by the orrery engine.
///
/// The numeric core (transforms, orbits, trails, camera) never fails; only
/// configuration loading and mesh construction at the renderer boundary can.
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to build mesh {key:?}: {reason}")]
    MeshBuild { key: MeshKey, reason: String },
}
