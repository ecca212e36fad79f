//! Constructor input for the modal adapter.

use std::collections::HashMap;
use std::sync::Arc;

use wcmodal_domain::{AppMetadata, RequestedNamespaces};

use crate::ports::outbound::{OptionsRegistryPort, ScaffoldPort, TransportPort};

/// Everything the adapter needs at construction.
///
/// `transport` and `project_id` are modeled as `Option` because their
/// absence is a defined runtime failure with a fixed diagnostic, not a
/// compile-time impossibility. The scaffold and registry handles are
/// plain dependencies.
pub struct ModalOptions {
    /// Universal wallet transport handle (mandatory at runtime)
    pub transport: Option<Arc<dyn TransportPort>>,
    /// Project identifier for downstream services (mandatory at runtime)
    pub project_id: Option<String>,
    /// Namespaces the adapter is allowed to request (mandatory, non-empty)
    pub namespaces: RequestedNamespaces,
    /// Caller-supplied chain-reference to image-URL overrides
    pub chain_images: HashMap<String, String>,
    /// On-ramp feature flag; defaults to disabled when absent
    pub enable_onramp: Option<bool>,
    /// Application metadata forwarded to the scaffold verbatim
    pub metadata: Option<AppMetadata>,
    /// Modal scaffold handle
    pub scaffold: Arc<dyn ScaffoldPort>,
    /// Shared options registry
    pub registry: Arc<dyn OptionsRegistryPort>,
}

impl ModalOptions {
    /// Options with the required collaborator handles and everything else
    /// unset.
    pub fn new(
        scaffold: Arc<dyn ScaffoldPort>,
        registry: Arc<dyn OptionsRegistryPort>,
        namespaces: RequestedNamespaces,
    ) -> Self {
        Self {
            transport: None,
            project_id: None,
            namespaces,
            chain_images: HashMap::new(),
            enable_onramp: None,
            metadata: None,
            scaffold,
            registry,
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn TransportPort>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_chain_images(mut self, chain_images: HashMap<String, String>) -> Self {
        self.chain_images = chain_images;
        self
    }

    pub fn with_enable_onramp(mut self, enable_onramp: bool) -> Self {
        self.enable_onramp = Some(enable_onramp);
        self
    }

    pub fn with_metadata(mut self, metadata: AppMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
