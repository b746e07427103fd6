use thiserror::Error;

/// Lookup failure for [`crate::CommandRegistry::get`].
///
/// The display message uppercases the command name; `name` keeps the form the
/// caller actually requested so callers can inspect it programmatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Command {} not found.", .name.to_uppercase())]
pub struct NoSuchCommand {
    /// The requested command name, original casing preserved.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_uppercases_but_payload_does_not() {
        let err = NoSuchCommand {
            name: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "Command BOGUS not found.");
        assert_eq!(err.name, "bogus");
    }
}
