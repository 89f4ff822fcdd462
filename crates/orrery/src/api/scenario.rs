use crate::api::config::OrreryConfig;
use crate::components::body::OrbitalBodySpec;

/// The contract every scene description must fulfill.
///
/// A scenario is pure data: it is asked once, at startup, for its
/// configuration and its body hierarchy. Reconfiguring means building a
/// new tree.
pub trait Scenario {
    /// Return engine configuration. Called once before the tree is built.
    fn config(&self) -> OrreryConfig {
        OrreryConfig::default()
    }

    /// Root bodies, each with its children nested inside it.
    fn bodies(&self) -> Vec<OrbitalBodySpec>;
}
