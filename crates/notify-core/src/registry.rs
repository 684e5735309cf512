//! Notifier registry keyed by tool name.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::info;

use crate::notifier::Notifier;
use crate::schema::ToolSchema;

/// Holds the notifiers a pipeline can dispatch to.
///
/// Registration order is kept so the tools offered to the model are stable.
#[derive(Default)]
pub struct NotifierRegistry {
    notifiers: IndexMap<String, Arc<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a notifier.
    ///
    /// If a notifier with the same name already exists, it will be replaced.
    pub fn register<N: Notifier + 'static>(&mut self, notifier: N) {
        self.register_arc(Arc::new(notifier));
    }

    /// Register a shared notifier.
    pub fn register_arc(&mut self, notifier: Arc<dyn Notifier>) {
        let name = notifier.name().to_string();
        info!("Registering notifier: {}", name);
        self.notifiers.insert(name, notifier);
    }

    /// Get a notifier by tool name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Notifier>> {
        self.notifiers.get(name)
    }

    /// Check if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.notifiers.contains_key(name)
    }

    /// Registered tool names in registration order.
    pub fn list_tools(&self) -> Vec<&str> {
        self.notifiers.keys().map(|s| s.as_str()).collect()
    }

    /// Schemas to declare to the model.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.notifiers.values().map(|n| n.schema().clone()).collect()
    }

    /// Number of registered notifiers.
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{async_trait, FunctionCall, NotificationResult, ParamType};
    use chrono::Local;

    struct EchoNotifier {
        schema: ToolSchema,
    }

    impl EchoNotifier {
        fn named(name: &str) -> Self {
            Self {
                schema: ToolSchema::new(name, "Echoes back the input").required_param(
                    "message",
                    ParamType::String,
                    "Text to echo",
                ),
            }
        }
    }

    #[async_trait]
    impl Notifier for EchoNotifier {
        fn schema(&self) -> &ToolSchema {
            &self.schema
        }

        async fn execute(&self, call: &FunctionCall) -> NotificationResult {
            NotificationResult::success(&call.render("message"), Local::now(), None)
        }
    }

    #[test]
    fn test_registry_basic() {
        let mut registry = NotifierRegistry::new();
        registry.register(EchoNotifier::named("echo"));

        assert!(registry.has_tool("echo"));
        assert!(!registry.has_tool("nonexistent"));
        assert_eq!(registry.list_tools(), vec!["echo"]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_schemas_keep_registration_order() {
        let mut registry = NotifierRegistry::new();
        registry.register(EchoNotifier::named("second"));
        registry.register(EchoNotifier::named("first"));

        let names: Vec<String> = registry.schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_dispatch_by_name() {
        let mut registry = NotifierRegistry::new();
        registry.register(EchoNotifier::named("echo"));

        let call = FunctionCall::from_json("echo", r#"{"message": "hello"}"#).unwrap();
        let notifier = registry.get(&call.name).unwrap();
        let result = notifier.execute(&call).await;

        assert!(result.is_success());
        assert_eq!(result.message, "Email sent successfully to hello");
    }

    #[test]
    fn test_empty_registry() {
        let registry = NotifierRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("anything").is_none());
    }
}
