//! Shared command-line flags and process setup for the demo drivers.

use clap::Args;
use notify_core::ExtractionPolicy;
use tracing_subscriber::EnvFilter;

use crate::config::{MissingFieldPolicy, PipelineConfig};

/// Flags common to both drivers.
#[derive(Debug, Clone, Default, Args)]
pub struct DemoArgs {
    /// Model to use instead of GEMINI_MODEL / the default
    #[arg(long)]
    pub model: Option<String>,

    /// Only accept a function call in the first response part
    #[arg(long)]
    pub first_part_only: bool,

    /// Skip delivery when the call is missing or mistyping required arguments
    #[arg(long)]
    pub reject_incomplete: bool,
}

impl DemoArgs {
    pub fn pipeline_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::new()
            .with_extraction(if self.first_part_only {
                ExtractionPolicy::FirstPart
            } else {
                ExtractionPolicy::FirstInCandidate
            })
            .with_missing_fields(if self.reject_incomplete {
                MissingFieldPolicy::Reject
            } else {
                MissingFieldPolicy::Proceed
            });

        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        config
    }
}

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        demo: DemoArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["demo"]);
        let config = cli.demo.pipeline_config();

        assert_eq!(config.model, None);
        assert_eq!(config.extraction, ExtractionPolicy::FirstInCandidate);
        assert_eq!(config.missing_fields, MissingFieldPolicy::Proceed);
    }

    #[test]
    fn test_flags() {
        let cli = TestCli::parse_from([
            "demo",
            "--model",
            "gemini-1.5-pro",
            "--first-part-only",
            "--reject-incomplete",
        ]);
        let config = cli.demo.pipeline_config();

        assert_eq!(config.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(config.extraction, ExtractionPolicy::FirstPart);
        assert_eq!(config.missing_fields, MissingFieldPolicy::Reject);
    }
}
