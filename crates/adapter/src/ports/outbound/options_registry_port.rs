//! Options Registry Port - shared options service announcement.
//!
//! The adapter announces its project identifier to a shared options
//! service once, at construction. The registry is an injected interface
//! rather than a module-level singleton so embedders and tests control
//! where the announcement lands.

/// Port for the shared options registry.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait OptionsRegistryPort: Send + Sync {
    /// Record the project identifier used for downstream services
    fn set_project_id(&self, project_id: &str);
}
