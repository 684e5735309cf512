//! Pipeline configuration.

use notify_core::ExtractionPolicy;

/// What to do when an extracted call lacks required fields or has mistyped ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingFieldPolicy {
    /// Deliver anyway, rendering missing values as the placeholder.
    #[default]
    Proceed,
    /// Skip delivery and report the validation failure.
    Reject,
}

/// Configuration for a [`Pipeline`](crate::Pipeline).
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Model override; the provider's default is used when `None`.
    pub model: Option<String>,
    /// Where to look for the function call.
    pub extraction: ExtractionPolicy,
    /// Handling of incomplete arguments.
    pub missing_fields: MissingFieldPolicy,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_extraction(mut self, extraction: ExtractionPolicy) -> Self {
        self.extraction = extraction;
        self
    }

    pub fn with_missing_fields(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_fields = policy;
        self
    }
}
