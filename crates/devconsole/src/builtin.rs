use std::sync::{Arc, Weak};

use crate::command::{CommandHandler, ConsoleCommand};
use crate::registry::CommandRegistry;

/// Register the default console commands into `registry`.
///
/// Currently `help` and `echo`. These are ordinary registrants: an embedding
/// application can re-register either name to replace them.
pub fn register_defaults(registry: &Arc<CommandRegistry>) {
    registry.register(
        ConsoleCommand::new(
            "help",
            HelpCommand {
                registry: Arc::downgrade(registry),
            },
        )
        .with_description("Show available console commands")
        .with_usage("help [command]"),
    );
    registry.register(
        ConsoleCommand::new("echo", |args: &[String]| args.join(" "))
            .with_description("Print the arguments back to the console")
            .with_usage("echo [args...]"),
    );
}

/// Stateful handler: enumerates the registry it lives in, so it holds a weak
/// reference back to it (a strong one would cycle through the registry's own
/// map).
struct HelpCommand {
    registry: Weak<CommandRegistry>,
}

impl CommandHandler for HelpCommand {
    fn call(&self, args: &[String]) -> String {
        let Some(registry) = self.registry.upgrade() else {
            return "Console registry is no longer available.".to_string();
        };

        match args.first() {
            Some(name) => match registry.get(name) {
                Ok(command) => {
                    let mut output = command.name.clone();
                    if !command.description.is_empty() {
                        output.push_str(&format!("\n{}", command.description));
                    }
                    if !command.usage.is_empty() {
                        output.push_str(&format!("\nUsage: {}", command.usage));
                    }
                    output
                }
                Err(not_found) => not_found.to_string(),
            },
            None => {
                let mut output = String::from("Available commands:\n");
                for command in registry.commands() {
                    output.push_str(&format!("  {}", command.name));
                    if !command.description.is_empty() {
                        output.push_str(&format!(" - {}", command.description));
                    }
                    output.push('\n');
                }
                output.push_str("Type 'help <command>' for usage.");
                output
            }
        }
    }
}
