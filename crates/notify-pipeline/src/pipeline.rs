//! One prompt in, at most one notification out.
//!
//! A run sends the prompt with the registered tool schemas, extracts the
//! model's function call and dispatches it to the matching notifier. Nothing
//! is kept between runs.
//!
//! Inference faults are returned as errors. Delivery faults never are: they
//! come back inside the [`NotificationResult`] of a `Notified` outcome.

use std::sync::Arc;

use notify_core::{
    extract_call, hash_prompt, ArgValidation, CompletionProvider, CompletionRequest, Extraction,
    FunctionCall, NotificationResult, NotifierRegistry, NotifyError,
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::{MissingFieldPolicy, PipelineConfig};

/// How a run ended.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PipelineOutcome {
    /// A notifier ran. `result` may still describe a delivery failure.
    Notified {
        call: FunctionCall,
        validation: ArgValidation,
        result: NotificationResult,
    },
    /// The call was incomplete and the policy forbade delivery.
    Rejected {
        call: FunctionCall,
        validation: ArgValidation,
    },
    /// The model called a tool nobody registered.
    UnknownTool { call: FunctionCall },
    /// The model answered without calling a tool.
    PlainText { text: String },
}

impl PipelineOutcome {
    /// The extracted call, if there was one.
    pub fn call(&self) -> Option<&FunctionCall> {
        match self {
            PipelineOutcome::Notified { call, .. }
            | PipelineOutcome::Rejected { call, .. }
            | PipelineOutcome::UnknownTool { call } => Some(call),
            PipelineOutcome::PlainText { .. } => None,
        }
    }

    /// The notification result, if a notifier ran.
    pub fn result(&self) -> Option<&NotificationResult> {
        match self {
            PipelineOutcome::Notified { result, .. } => Some(result),
            _ => None,
        }
    }
}

/// Prompt-to-notification pipeline.
pub struct Pipeline {
    provider: Arc<dyn CompletionProvider>,
    registry: NotifierRegistry,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        registry: NotifierRegistry,
        config: PipelineConfig,
    ) -> Self {
        Self {
            provider,
            registry,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn registry(&self) -> &NotifierRegistry {
        &self.registry
    }

    /// Run the pipeline once for `prompt`.
    #[instrument(skip(self, prompt), fields(provider = self.provider.name()))]
    pub async fn run(&self, prompt: &str) -> Result<PipelineOutcome, NotifyError> {
        info!(
            "Requesting completion (prompt {}, tools {:?})",
            &hash_prompt(prompt)[..12],
            self.registry.list_tools()
        );

        let mut request = CompletionRequest::new(prompt).with_tools(self.registry.schemas());
        if let Some(model) = &self.config.model {
            request = request.with_model(model.clone());
        }

        let response = self.provider.generate(request).await?;

        let call = match extract_call(&response, self.config.extraction) {
            Extraction::Call(call) => call,
            Extraction::Text(text) => {
                info!("Model answered without a function call");
                return Ok(PipelineOutcome::PlainText { text });
            }
        };

        let Some(notifier) = self.registry.get(&call.name) else {
            warn!("Model called unregistered tool '{}'", call.name);
            return Ok(PipelineOutcome::UnknownTool { call });
        };

        let validation = call.validate(notifier.schema());
        if !validation.is_complete() {
            warn!(
                "Call to '{}' is incomplete (missing: {:?}, mistyped: {:?})",
                call.name, validation.missing, validation.mistyped
            );
            if self.config.missing_fields == MissingFieldPolicy::Reject {
                return Ok(PipelineOutcome::Rejected { call, validation });
            }
        }

        debug!("Dispatching '{}'", call.name);
        let result = notifier.execute(&call).await;
        info!("Notification finished with status {:?}", result.status);

        Ok(PipelineOutcome::Notified {
            call,
            validation,
            result,
        })
    }
}
