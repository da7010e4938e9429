//! Line-oriented command scripts for replaying interactions.
//!
//! ```text
//! # comments and blank lines are ignored
//! category news
//! type  alp        (everything after "type " is the raw input, spaces kept)
//! wait 300
//! sort popularity
//! clear
//! settle
//! teardown
//! ```

use super::handler::Command;
use crate::domain::{CollectionError, Result, SortKey};
use std::time::Duration;

/// One step of a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Dispatch a command.
    Command(Command),
    /// Advance the clock.
    Wait(Duration),
    /// Run every pending timer to completion.
    Settle,
}

/// Parses a script into steps.
///
/// # Errors
///
/// Returns [`CollectionError::Script`] naming the first line with an unknown
/// verb, a missing argument or a malformed duration.
///
/// # Example
///
/// ```
/// use faceted_collection::app::{parse_script, Command, ScriptStep};
/// use std::time::Duration;
///
/// let steps = parse_script("type alp\nwait 300\n").unwrap();
/// assert_eq!(steps, vec![
///     ScriptStep::Command(Command::SetSearchTerm("alp".into())),
///     ScriptStep::Wait(Duration::from_millis(300)),
/// ]);
/// ```
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
            continue;
        }

        let raw = raw.trim_start();
        let (verb, rest) = raw.split_once(' ').unwrap_or((raw, ""));
        let argument = rest.trim();
        let error = |message: String| CollectionError::Script { line, message };

        let step = match verb {
            "category" => {
                if argument.is_empty() {
                    return Err(error("category needs a token".to_string()));
                }
                ScriptStep::Command(Command::SelectCategory(argument.to_string()))
            }
            "sort" => ScriptStep::Command(Command::SelectSort(SortKey::from_token(argument))),
            "type" => ScriptStep::Command(Command::SetSearchTerm(rest.to_string())),
            "clear" => ScriptStep::Command(Command::ClearSearch),
            "teardown" => ScriptStep::Command(Command::Teardown),
            "settle" => ScriptStep::Settle,
            "wait" => {
                let ms = argument
                    .parse::<u64>()
                    .map_err(|e| error(format!("invalid wait duration {argument:?}: {e}")))?;
                ScriptStep::Wait(Duration::from_millis(ms))
            }
            other => return Err(error(format!("unknown command {other:?}"))),
        };
        steps.push(step);
    }

    tracing::debug!(steps = steps.len(), "script parsed");
    Ok(steps)
}
