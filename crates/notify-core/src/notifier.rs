//! The Notifier trait definition.

use async_trait::async_trait;

use crate::call::FunctionCall;
use crate::result::NotificationResult;
use crate::schema::ToolSchema;

/// A side effect the model can trigger by calling a tool.
///
/// Unlike [`CompletionProvider`](crate::CompletionProvider), a notifier never
/// returns an error: every fault is folded into the [`NotificationResult`].
///
/// # Example
///
/// ```no_run
/// use notify_core::{
///     async_trait, FunctionCall, NotificationResult, Notifier, NotifierRegistry, ParamType,
///     ToolSchema,
/// };
///
/// struct LogNotifier {
///     schema: ToolSchema,
/// }
///
/// #[async_trait]
/// impl Notifier for LogNotifier {
///     fn schema(&self) -> &ToolSchema {
///         &self.schema
///     }
///
///     async fn execute(&self, call: &FunctionCall) -> NotificationResult {
///         println!("{}", call.render("message"));
///         NotificationResult::success("log", chrono::Local::now(), None)
///     }
/// }
///
/// let mut registry = NotifierRegistry::new();
/// registry.register(LogNotifier {
///     schema: ToolSchema::new("log", "Write a line to stdout")
///         .required_param("message", ParamType::String, "Line to write"),
/// });
/// assert!(registry.has_tool("log"));
/// ```
#[async_trait]
pub trait Notifier: Send + Sync {
    /// The tool declaration this notifier answers to.
    fn schema(&self) -> &ToolSchema;

    /// Perform the side effect once.
    ///
    /// Arguments are read permissively; missing fields do not fail fast.
    async fn execute(&self, call: &FunctionCall) -> NotificationResult;

    /// Tool name (defaults to the schema name).
    fn name(&self) -> &str {
        &self.schema().name
    }
}
