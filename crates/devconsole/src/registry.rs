use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::command::ConsoleCommand;
use crate::error::NoSuchCommand;

/// Registry that manages all known console commands for the process lifetime.
///
/// Names are case-insensitive and unique: registering under an existing name
/// replaces the previous command entirely. Entries are never removed
/// otherwise. Construct one registry per process and hand it out explicitly
/// (typically behind an `Arc`) instead of going through a hidden global.
///
/// All operations are synchronous and in-memory. The map is guarded by an
/// `RwLock`, so registrants may run on background threads (e.g. an asset
/// loader registering a command once its load completes).
pub struct CommandRegistry {
    commands: RwLock<HashMap<String, ConsoleCommand>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: RwLock::new(HashMap::new()),
        }
    }

    // Handlers never run while a guard is held, so a poisoned lock still
    // guards a consistent map; recover the guard instead of failing lookups.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ConsoleCommand>> {
        self.commands.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ConsoleCommand>> {
        self.commands.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a command, silently replacing any previous command under the
    /// same case-insensitive name.
    pub fn register(&self, command: ConsoleCommand) {
        let key = command.name.to_lowercase();
        log::trace!("registering console command '{}'", command.name);
        if let Some(previous) = self.write().insert(key, command) {
            log::debug!(
                "console command '{}' re-registered; previous handler dropped",
                previous.name
            );
        }
    }

    /// Look up a command by name, case-insensitively.
    pub fn get(&self, name: &str) -> Result<ConsoleCommand, NoSuchCommand> {
        self.read()
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| NoSuchCommand {
                name: name.to_string(),
            })
    }

    /// Like [`get`](Self::get), but downgrades the not-found case to `None`.
    pub fn try_get(&self, name: &str) -> Option<ConsoleCommand> {
        self.get(name).ok()
    }

    /// Whether a command is registered under `name`, case-insensitively.
    pub fn has(&self, name: &str) -> bool {
        self.read().contains_key(&name.to_lowercase())
    }

    /// Resolve `name` and invoke its handler with `args`, returning the
    /// handler's output verbatim.
    ///
    /// An unknown command is an expected outcome on this path, not an error:
    /// the caller gets the not-found message as ordinary output and never has
    /// to branch on a failure. A panic raised by the handler itself is not
    /// caught here.
    pub fn execute(&self, name: &str, args: &[String]) -> String {
        // The descriptor is cloned out before invocation, so handlers are free
        // to call back into the registry.
        match self.get(name) {
            Ok(command) => command.invoke(args),
            Err(not_found) => not_found.to_string(),
        }
    }

    /// Snapshot of all registered commands, sorted ascending by name
    /// (byte-wise). Recomputed on every call.
    pub fn commands(&self) -> Vec<ConsoleCommand> {
        let mut commands: Vec<_> = self.read().values().cloned().collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));
        commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn noop(name: &str) -> ConsoleCommand {
        ConsoleCommand::new(name, |_: &[String]| String::new())
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = CommandRegistry::new();
        registry.register(noop("Foo"));

        for variant in ["Foo", "FOO", "foo", "fOo"] {
            assert!(registry.has(variant), "has({variant})");
            assert_eq!(registry.get(variant).unwrap().name, "Foo");
            assert_eq!(registry.try_get(variant).unwrap().name, "Foo");
        }
    }

    #[test]
    fn reregistration_replaces_old_handler() {
        let registry = CommandRegistry::new();
        let old_calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&old_calls);
        registry.register(ConsoleCommand::new("reload", move |_: &[String]| {
            counter.fetch_add(1, Ordering::SeqCst);
            "old".to_string()
        }));
        registry.register(ConsoleCommand::new("RELOAD", |_: &[String]| {
            "new".to_string()
        }));

        assert_eq!(registry.execute("reload", &[]), "new");
        assert_eq!(old_calls.load(Ordering::SeqCst), 0);
        assert_eq!(registry.commands().len(), 1);
    }

    #[test]
    fn enumeration_is_sorted_by_name() {
        let registry = CommandRegistry::new();
        registry.register(noop("zulu"));
        registry.register(noop("alpha"));
        registry.register(noop("mike"));

        let names: Vec<_> = registry
            .commands()
            .into_iter()
            .map(|command| command.name)
            .collect();
        assert_eq!(names, ["alpha", "mike", "zulu"]);
    }

    #[test]
    fn execute_unknown_command_returns_message() {
        let registry = CommandRegistry::new();
        let output = registry.execute("bogus", &[]);
        assert!(output.contains("BOGUS"), "{output}");
        assert!(output.contains("not found"), "{output}");
    }

    #[test]
    fn get_unknown_command_carries_requested_name() {
        let registry = CommandRegistry::new();
        let err = registry.get("bogus").unwrap_err();
        assert_eq!(err.name, "bogus");
        assert!(registry.try_get("bogus").is_none());
        assert!(!registry.has("bogus"));
    }

    #[test]
    fn arguments_pass_through_untouched() {
        let registry = CommandRegistry::new();
        registry.register(ConsoleCommand::new("echo", |args: &[String]| {
            args.join(" ")
        }));

        let args = vec!["a".to_string(), "b".to_string()];
        assert_eq!(registry.execute("echo", &args), "a b");
        assert_eq!(registry.execute("echo", &[]), "");
    }

    #[test]
    fn handler_may_register_into_the_registry() {
        let registry = Arc::new(CommandRegistry::new());

        let inner = Arc::downgrade(&registry);
        registry.register(ConsoleCommand::new("install", move |_: &[String]| {
            if let Some(registry) = inner.upgrade() {
                registry.register(ConsoleCommand::new("installed", |_: &[String]| {
                    "ok".to_string()
                }));
            }
            "done".to_string()
        }));

        assert_eq!(registry.execute("install", &[]), "done");
        assert_eq!(registry.execute("installed", &[]), "ok");
    }

    #[test]
    fn concurrent_registration_loses_no_updates() {
        let registry = Arc::new(CommandRegistry::new());
        let threads = 8;
        let per_thread = 25;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for i in 0..per_thread {
                        registry.register(noop(&format!("cmd-{t}-{i}")));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.commands().len(), threads * per_thread);
        for t in 0..threads {
            for i in 0..per_thread {
                assert!(registry.has(&format!("cmd-{t}-{i}")));
            }
        }
    }
}
