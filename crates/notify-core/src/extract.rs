//! Function call extraction.
//!
//! Only the first candidate is ever inspected. Responses carrying more than
//! one call are not supported: the first call wins and the rest are logged
//! and dropped.

use tracing::{debug, warn};

use crate::call::FunctionCall;
use crate::completion::{CompletionResponse, Part};

/// Where to look for a function call in the first candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractionPolicy {
    /// Inspect only the first part.
    FirstPart,
    /// Take the first call found in any part.
    #[default]
    FirstInCandidate,
}

/// What the extractor found.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The model asked for a tool call.
    Call(FunctionCall),
    /// The model answered in plain text.
    Text(String),
}

impl Extraction {
    /// The extracted call, if any.
    pub fn call(&self) -> Option<&FunctionCall> {
        match self {
            Extraction::Call(call) => Some(call),
            Extraction::Text(_) => None,
        }
    }
}

/// Extract the function call from a response, falling back to its text.
pub fn extract_call(response: &CompletionResponse, policy: ExtractionPolicy) -> Extraction {
    let Some(candidate) = response.candidates.first() else {
        debug!("Response has no candidates");
        return Extraction::Text(String::new());
    };

    let mut calls = candidate.parts.iter().filter_map(|part| match part {
        Part::FunctionCall(call) => Some(call),
        Part::Text(_) => None,
    });

    let found = match policy {
        ExtractionPolicy::FirstPart => match candidate.parts.first() {
            Some(Part::FunctionCall(call)) => Some(call),
            _ => None,
        },
        ExtractionPolicy::FirstInCandidate => calls.next(),
    };

    match found {
        Some(call) => {
            let total = candidate
                .parts
                .iter()
                .filter(|part| matches!(part, Part::FunctionCall(_)))
                .count();
            if total > 1 {
                warn!(
                    "Response contained {} function calls; only '{}' will be executed",
                    total, call.name
                );
            }
            Extraction::Call(call.clone())
        }
        None => Extraction::Text(candidate.text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::Candidate;
    use serde_json::json;

    fn call(name: &str) -> FunctionCall {
        FunctionCall::from_value(name, json!({"k": "v"})).unwrap()
    }

    fn response(parts: Vec<Part>) -> CompletionResponse {
        CompletionResponse {
            candidates: vec![Candidate {
                parts,
                finish_reason: None,
            }],
        }
    }

    #[test]
    fn test_first_part_call() {
        let response = CompletionResponse::from_call(call("a"));
        for policy in [ExtractionPolicy::FirstPart, ExtractionPolicy::FirstInCandidate] {
            assert_eq!(extract_call(&response, policy), Extraction::Call(call("a")));
        }
    }

    #[test]
    fn test_text_only_falls_back() {
        let response = CompletionResponse::from_text("No notification needed.");
        let extraction = extract_call(&response, ExtractionPolicy::default());
        assert_eq!(extraction, Extraction::Text("No notification needed.".to_string()));
        assert!(extraction.call().is_none());
    }

    #[test]
    fn test_call_after_text_depends_on_policy() {
        let response = response(vec![Part::Text("Sending now. ".to_string()), Part::FunctionCall(call("a"))]);

        assert_eq!(
            extract_call(&response, ExtractionPolicy::FirstPart),
            Extraction::Text("Sending now. ".to_string())
        );
        assert_eq!(
            extract_call(&response, ExtractionPolicy::FirstInCandidate),
            Extraction::Call(call("a"))
        );
    }

    #[test]
    fn test_multiple_calls_takes_first() {
        let response = response(vec![Part::FunctionCall(call("a")), Part::FunctionCall(call("b"))]);
        assert_eq!(
            extract_call(&response, ExtractionPolicy::FirstInCandidate),
            Extraction::Call(call("a"))
        );
    }

    #[test]
    fn test_only_first_candidate_inspected() {
        let response = CompletionResponse {
            candidates: vec![
                Candidate {
                    parts: vec![Part::Text("plain".to_string())],
                    finish_reason: None,
                },
                Candidate {
                    parts: vec![Part::FunctionCall(call("b"))],
                    finish_reason: None,
                },
            ],
        };
        assert_eq!(
            extract_call(&response, ExtractionPolicy::FirstInCandidate),
            Extraction::Text("plain".to_string())
        );
    }

    #[test]
    fn test_no_candidates() {
        let extraction = extract_call(&CompletionResponse::default(), ExtractionPolicy::default());
        assert_eq!(extraction, Extraction::Text(String::new()));
    }
}
