//! Scripted completion providers.

use std::collections::VecDeque;

use notify_core::{
    async_trait, CompletionProvider, CompletionRequest, CompletionResponse, FunctionCall,
    NotifyError,
};
use serde_json::{Map, Value};
use tokio::sync::Mutex;

/// A provider that replays canned responses in order.
///
/// Every request is recorded so tests can check what the pipeline sent.
/// Once the script runs out, further calls fail with
/// [`NotifyError::ProcessingFailed`].
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<CompletionResponse>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    /// Create a provider that answers with the given responses in order.
    pub fn new(responses: impl IntoIterator<Item = CompletionResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer once with plain text.
    pub fn replying_with_text(text: impl Into<String>) -> Self {
        Self::new([CompletionResponse::from_text(text)])
    }

    /// Answer once with a function call.
    ///
    /// Non-object `args` are treated as an empty argument map.
    pub fn replying_with_call(name: impl Into<String>, args: Value) -> Self {
        let arguments = match args {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new([CompletionResponse::from_call(FunctionCall::new(name, arguments))])
    }

    /// Requests received so far.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of responses not yet consumed.
    pub async fn remaining(&self) -> usize {
        self.responses.lock().await.len()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn generate(&self, request: CompletionRequest) -> Result<CompletionResponse, NotifyError> {
        self.requests.lock().await.push(request);
        self.responses
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| NotifyError::ProcessingFailed("script exhausted".to_string()))
    }

    fn name(&self) -> &str {
        "ScriptedProvider"
    }
}

/// A provider whose service is always unreachable.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    reason: String,
}

impl FailingProvider {
    /// Fail every request with a network error carrying `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for FailingProvider {
    fn default() -> Self {
        Self::new("Failed to send request: connection refused")
    }
}

#[async_trait]
impl CompletionProvider for FailingProvider {
    async fn generate(&self, _request: CompletionRequest) -> Result<CompletionResponse, NotifyError> {
        Err(NotifyError::Network(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "FailingProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify_core::{extract_call, Extraction, ExtractionPolicy};
    use serde_json::json;

    #[tokio::test]
    async fn test_replays_in_order_then_exhausts() {
        let provider = ScriptedProvider::new([
            CompletionResponse::from_text("first"),
            CompletionResponse::from_text("second"),
        ]);

        assert_eq!(provider.generate(CompletionRequest::new("a")).await.unwrap().text(), "first");
        assert_eq!(provider.generate(CompletionRequest::new("b")).await.unwrap().text(), "second");
        assert!(provider.generate(CompletionRequest::new("c")).await.is_err());

        let prompts: Vec<String> = provider.requests().await.into_iter().map(|r| r.prompt).collect();
        assert_eq!(prompts, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_replying_with_call() {
        let provider = ScriptedProvider::replying_with_call("Send_Email", json!({"targetEmailId": "x@y.z"}));
        let response = provider.generate(CompletionRequest::new("p")).await.unwrap();

        match extract_call(&response, ExtractionPolicy::FirstPart) {
            Extraction::Call(call) => assert_eq!(call.get_string("targetEmailId"), Some("x@y.z")),
            other => panic!("expected call, got {:?}", other),
        }
        assert_eq!(provider.remaining().await, 0);
    }

    #[tokio::test]
    async fn test_failing_provider() {
        let provider = FailingProvider::new("dns failure");
        let result = provider.generate(CompletionRequest::new("p")).await;
        assert!(matches!(result, Err(NotifyError::Network(msg)) if msg == "dns failure"));
    }
}
