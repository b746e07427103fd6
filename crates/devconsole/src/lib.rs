//! Runtime command registry and dispatcher for a developer console.
//!
//! # Overview
//! Any subsystem can register a named command (a handler plus optional
//! description and usage text) at any point during execution. A console
//! front-end later resolves commands by name and executes them with
//! already-tokenized string arguments, rendering the returned string as
//! output. Tokenizing raw input and drawing the console are the front-end's
//! job, not this crate's.
//!
//! Key behaviors:
//!
//! - Command names are case-insensitive; re-registering a name replaces the
//!   previous command outright
//! - On the execute path, "unknown command" is ordinary textual output, never
//!   an error the caller has to branch on
//! - Thread-safe: construct one [`CommandRegistry`] per process and share it
//!   behind an `Arc`

/// Default commands shipped with the console (`help`, `echo`)
pub mod builtin;

/// Command descriptor and the handler capability trait
pub mod command;

/// Error types and handling
pub mod error;

/// The registry itself: registration, lookup and dispatch
pub mod registry;

pub use command::{CommandHandler, ConsoleCommand};
pub use error::NoSuchCommand;
pub use registry::CommandRegistry;
