use std::sync::Arc;

use clap::Parser;
use gemini_brain::GeminiClient;
use notify_core::NotifierRegistry;
use notify_pipeline::cli::{init_tracing, DemoArgs};
use notify_pipeline::prompts::{advanced_assessment_prompt, beginner_assessment_prompt};
use notify_pipeline::{
    banner, render_outcome, EmployerNotifier, NotifierSettings, Pipeline, DEFAULT_LOCATION,
};
use smtp_notifier::SmtpMailer;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "coding-assessment")]
#[command(about = "Rate two coding doubts and alert the employer when a rating is below 4")]
struct Args {
    #[command(flatten)]
    demo: DemoArgs,

    /// Location printed in the employer alert
    #[arg(long, default_value = DEFAULT_LOCATION)]
    location: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();
    let args = Args::parse();

    let provider = Arc::new(GeminiClient::from_env()?);
    let mailer = Arc::new(SmtpMailer::from_env()?);

    let mut registry = NotifierRegistry::new();
    registry.register(
        EmployerNotifier::new(mailer)
            .with_settings(NotifierSettings::from_env())
            .with_location(args.location),
    );

    let pipeline = Pipeline::new(provider, registry, args.demo.pipeline_config());
    info!("Pipeline ready: {:?}", pipeline.config());

    println!("{}", banner("TEST 1: BASIC CODING DOUBT (SHOULD TRIGGER EMAIL)"));
    let outcome = pipeline.run(&beginner_assessment_prompt()).await?;
    println!("{}", render_outcome(&outcome));

    println!("\n{}", banner("TEST 2: ADVANCED CODING DOUBT (NO EMAIL)"));
    let outcome = pipeline.run(&advanced_assessment_prompt()).await?;
    println!("{}", render_outcome(&outcome));

    Ok(())
}
