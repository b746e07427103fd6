use std::fmt;
use std::sync::Arc;

/// Trait implemented by anything that can serve as a command callback.
///
/// Handlers receive the already-tokenized arguments (the command name itself
/// is not included) and produce the textual output of the invocation. Plain
/// closures satisfy this via the blanket impl below; stateful handlers
/// implement it directly.
pub trait CommandHandler: Send + Sync {
    fn call(&self, args: &[String]) -> String;
}

impl<F> CommandHandler for F
where
    F: Fn(&[String]) -> String + Send + Sync,
{
    fn call(&self, args: &[String]) -> String {
        self(args)
    }
}

/// A registered console command: its name, informational metadata and the
/// handler invoked on execution.
///
/// Cloning is cheap; the handler is shared behind an `Arc`.
#[derive(Clone)]
pub struct ConsoleCommand {
    /// Command name, in the casing the registrant supplied. Lookup against it
    /// is case-insensitive.
    pub name: String,
    /// Free-text description, informational only.
    pub description: String,
    /// Free-text usage hint, informational only.
    pub usage: String,
    handler: Arc<dyn CommandHandler>,
}

impl ConsoleCommand {
    /// Create a command with empty description and usage.
    pub fn new(name: impl Into<String>, handler: impl CommandHandler + 'static) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            usage: String::new(),
            handler: Arc::new(handler),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Invoke the handler with already-tokenized arguments and return its
    /// output verbatim. Arity checking, if any, is the handler's own business.
    pub fn invoke(&self, args: &[String]) -> String {
        self.handler.call(args)
    }
}

impl fmt::Debug for ConsoleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleCommand")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}
