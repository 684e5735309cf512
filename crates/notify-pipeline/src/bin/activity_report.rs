use std::sync::Arc;

use clap::Parser;
use gemini_brain::GeminiClient;
use notify_core::NotifierRegistry;
use notify_pipeline::cli::{init_tracing, DemoArgs};
use notify_pipeline::prompts::{activity_report_prompt, DEMO_ACTIVITY};
use notify_pipeline::{render_outcome, AuthorityReportNotifier, NotifierSettings, Pipeline};
use smtp_notifier::SmtpMailer;

#[derive(Debug, Parser)]
#[command(name = "activity-report")]
#[command(about = "Classify a described activity and email a report to authorities if it is illegal")]
struct Args {
    #[command(flatten)]
    demo: DemoArgs,

    /// Activity to classify
    #[arg(long, default_value = DEMO_ACTIVITY)]
    activity: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();
    let args = Args::parse();

    let provider = Arc::new(GeminiClient::from_env()?);
    let mailer = Arc::new(SmtpMailer::from_env()?);

    let mut registry = NotifierRegistry::new();
    registry.register(AuthorityReportNotifier::new(mailer).with_settings(NotifierSettings::from_env()));

    let pipeline = Pipeline::new(provider, registry, args.demo.pipeline_config());
    let outcome = pipeline.run(&activity_report_prompt(&args.activity)).await?;
    println!("{}", render_outcome(&outcome));

    Ok(())
}
