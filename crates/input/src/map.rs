//! Line mapping from terminal input to session actions.

use crate::types::SessionAction;

/// Shown for `/help`.
pub const HELP_TEXT: &str = "\
COMMANDS:
  <word>   submit a decryption key
  /hint    buy a hint (costs 50)
  /skip    bypass the packet (costs 100, resets streak)
  /retry   reconnect after the timer expires
  /quit    disconnect
  /help    show this list";

/// What one line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Feed the session.
    Action(SessionAction),
    /// Leave the program.
    Quit,
    /// Print [`HELP_TEXT`].
    Help,
}

/// Map a line of input to a command.
///
/// Blank lines map to `None`. Command words are case-insensitive; anything
/// that is not a known command, including unknown `/words`, is submitted as
/// a guess verbatim so the session does the normalizing.
pub fn parse_command(line: &str) -> Option<InputCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let command = match trimmed.to_ascii_lowercase().as_str() {
        "/hint" => InputCommand::Action(SessionAction::Hint),
        "/skip" => InputCommand::Action(SessionAction::Skip),
        "/retry" => InputCommand::Action(SessionAction::Retry),
        "/quit" | "/exit" => InputCommand::Quit,
        "/help" | "?" => InputCommand::Help,
        _ => InputCommand::Action(SessionAction::Guess(trimmed.to_string())),
    };
    Some(command)
}
