//! Ask Gemini a question with a single tool declared and show what comes back.
//!
//! Run with: cargo run -p gemini-brain --example test_function_call
//! Or with a custom prompt: cargo run -p gemini-brain --example test_function_call -- "Your prompt"
//!
//! Make sure to set environment variables in .env:
//!   GOOGLE_GENAI_API_KEY - Gemini API key

use gemini_brain::{CompletionProvider, CompletionRequest, GeminiClient, ToolSchema};
use notify_core::{extract_call, Extraction, ExtractionPolicy, ParamType};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let prompt = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "What is the weather in Guwahati right now? Use the tool if you need to.".to_string()
    };

    let client = GeminiClient::from_env()?;
    println!("Provider: {}", client.name());
    println!("Model: {}", client.config().model);
    println!();

    let tool = ToolSchema::new("get_weather", "Look up current weather for a city")
        .required_param("city", ParamType::String, "City name");

    println!("Sending: \"{}\"", prompt);
    let response = client
        .generate(CompletionRequest::new(prompt).with_tools(vec![tool]))
        .await?;

    match extract_call(&response, ExtractionPolicy::default()) {
        Extraction::Call(call) => {
            println!("Function to call: {}", call.name);
            println!("Arguments: {}", serde_json::Value::Object(call.arguments));
        }
        Extraction::Text(text) => {
            println!("No function call found in the response.");
            println!("{}", text);
        }
    }

    Ok(())
}
