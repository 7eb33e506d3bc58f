//! Command parsing for player input.

use crate::error::{SessionError, SessionResult};
use crate::resources::Resource;

/// Output format for a journal export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Markdown document.
    Markdown,
    /// Plain text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl ExportFormat {
    /// Parse a format name. An empty name means markdown.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" | "" => Some(Self::Markdown),
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Draw one token for food.
    Food,
    /// Draw a weather card.
    Weather,
    /// Draw tokens for wood.
    Wood {
        /// Number of tokens declared. Range is checked by the bag.
        declared: u32,
    },
    /// Change a resource counter.
    Adjust {
        /// The resource to change.
        resource: Resource,
        /// Signed amount to add.
        delta: i64,
    },
    /// Show resources, round, and deck size.
    Status,
    /// Show the remaining deck.
    Deck,
    /// Show recent journal entries.
    Journal,
    /// Export the whole journal.
    Export {
        /// Requested format.
        format: ExportFormat,
    },
    /// Show help.
    Help,
    /// End the session.
    Quit,
    /// Blank input.
    Empty,
}

const QUIT_VERBS: &[&str] = &["q", "quit"];
const HELP_VERBS: &[&str] = &["help", "h", "?"];

/// Parse one line of player input.
///
/// Input is trimmed and lower-cased. Anything starting with `w` is a wood
/// draw, so `wood` is a malformed count rather than an unknown command.
pub fn parse_command(input: &str) -> SessionResult<Command> {
    let line = input.trim().to_lowercase();
    if line.is_empty() {
        return Ok(Command::Empty);
    }

    if let Some(count) = line.strip_prefix('w') {
        return parse_wood(count, &line);
    }
    if let Some(rest) = line.strip_prefix('+') {
        return parse_adjust(rest, 1);
    }
    if let Some(rest) = line.strip_prefix('-') {
        return parse_adjust(rest, -1);
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let rest: Vec<&str> = words.collect();

    match verb {
        "f" if rest.is_empty() => Ok(Command::Food),
        "r" if rest.is_empty() => Ok(Command::Weather),
        "status" => Ok(Command::Status),
        "deck" => Ok(Command::Deck),
        "journal" => Ok(Command::Journal),
        "export" => {
            let name = rest.join(" ");
            ExportFormat::parse(&name)
                .map(|format| Command::Export { format })
                .ok_or_else(|| {
                    SessionError::InvalidChoice(format!(
                        "unknown format '{name}', use: markdown, text, json"
                    ))
                })
        }
        v if HELP_VERBS.contains(&v) => Ok(Command::Help),
        v if QUIT_VERBS.contains(&v) && rest.is_empty() => Ok(Command::Quit),
        _ => Err(SessionError::UnknownCommand(line)),
    }
}

fn parse_wood(count: &str, line: &str) -> SessionResult<Command> {
    let count = count.trim();
    if count.is_empty() {
        return Err(SessionError::MissingCount);
    }
    if !count.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SessionError::InvalidCount(line.to_string()));
    }
    // Digits only, so the parse can only fail on overflow, which is out of
    // range anyway.
    let declared = count.parse::<u32>().unwrap_or(u32::MAX);
    Ok(Command::Wood { declared })
}

fn parse_adjust(rest: &str, sign: i64) -> SessionResult<Command> {
    let mut words = rest.split_whitespace();
    let usage = || {
        SessionError::InvalidChoice(
            "usage: +<resource> [amount] or -<resource> [amount]".to_string(),
        )
    };

    let name = words.next().ok_or_else(usage)?;
    let resource =
        Resource::parse(name).ok_or_else(|| SessionError::UnknownResource(name.to_string()))?;

    let amount = match words.next() {
        None => 1,
        Some(n) if n.bytes().all(|b| b.is_ascii_digit()) => {
            n.parse::<i64>().map_err(|_| usage())?
        }
        Some(_) => return Err(usage()),
    };
    if words.next().is_some() {
        return Err(usage());
    }

    Ok(Command::Adjust {
        resource,
        delta: sign * amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_draws() {
        assert_eq!(parse_command("f").unwrap(), Command::Food);
        assert_eq!(parse_command("R").unwrap(), Command::Weather);
        assert_eq!(parse_command("  r  ").unwrap(), Command::Weather);
        assert_eq!(parse_command("w3").unwrap(), Command::Wood { declared: 3 });
        assert_eq!(parse_command("W5").unwrap(), Command::Wood { declared: 5 });
    }

    #[test]
    fn wood_range_is_left_to_the_bag() {
        assert_eq!(parse_command("w0").unwrap(), Command::Wood { declared: 0 });
        assert_eq!(parse_command("w6").unwrap(), Command::Wood { declared: 6 });
        assert_eq!(
            parse_command("w99999999999").unwrap(),
            Command::Wood { declared: u32::MAX }
        );
    }

    #[test]
    fn wood_missing_count() {
        assert!(matches!(parse_command("w"), Err(SessionError::MissingCount)));
        assert!(matches!(parse_command("w  "), Err(SessionError::MissingCount)));
    }

    #[test]
    fn wood_non_numeric_count() {
        assert!(matches!(
            parse_command("wabc"),
            Err(SessionError::InvalidCount(s)) if s == "wabc"
        ));
        assert!(matches!(parse_command("wood"), Err(SessionError::InvalidCount(_))));
        assert!(matches!(parse_command("w-1"), Err(SessionError::InvalidCount(_))));
        assert!(matches!(parse_command("w+3"), Err(SessionError::InvalidCount(_))));
        assert!(matches!(parse_command("w3.5"), Err(SessionError::InvalidCount(_))));
    }

    #[test]
    fn wood_count_may_be_spaced() {
        assert_eq!(parse_command("w 2").unwrap(), Command::Wood { declared: 2 });
    }

    #[test]
    fn parse_quit() {
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
        assert_eq!(parse_command("QUIT").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_adjustments() {
        assert_eq!(
            parse_command("+food").unwrap(),
            Command::Adjust {
                resource: Resource::Food,
                delta: 1
            }
        );
        assert_eq!(
            parse_command("-raft 2").unwrap(),
            Command::Adjust {
                resource: Resource::Raft,
                delta: -2
            }
        );
        assert!(matches!(
            parse_command("+gold"),
            Err(SessionError::UnknownResource(_))
        ));
        assert!(matches!(parse_command("+"), Err(SessionError::InvalidChoice(_))));
        assert!(matches!(
            parse_command("+water lots"),
            Err(SessionError::InvalidChoice(_))
        ));
    }

    #[test]
    fn parse_info_commands() {
        assert_eq!(parse_command("status").unwrap(), Command::Status);
        assert_eq!(parse_command("deck").unwrap(), Command::Deck);
        assert_eq!(parse_command("journal").unwrap(), Command::Journal);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("?").unwrap(), Command::Help);
    }

    #[test]
    fn parse_export() {
        assert_eq!(
            parse_command("export").unwrap(),
            Command::Export {
                format: ExportFormat::Markdown
            }
        );
        assert_eq!(
            parse_command("export json").unwrap(),
            Command::Export {
                format: ExportFormat::Json
            }
        );
        assert!(matches!(
            parse_command("export pdf"),
            Err(SessionError::InvalidChoice(_))
        ));
    }

    #[test]
    fn unknown_commands() {
        assert!(matches!(
            parse_command("x"),
            Err(SessionError::UnknownCommand(s)) if s == "x"
        ));
        assert!(matches!(parse_command("f 2"), Err(SessionError::UnknownCommand(_))));
        assert!(matches!(parse_command("rain"), Err(SessionError::UnknownCommand(_))));
    }

    #[test]
    fn blank_input() {
        assert_eq!(parse_command("").unwrap(), Command::Empty);
        assert_eq!(parse_command("   ").unwrap(), Command::Empty);
    }
}
