pub mod breathe;
pub mod config;
pub mod gratitude;
pub mod ground;
pub mod journal;
pub mod prompts;

use echobloom_core::{ActivityEvent, Config, HttpActivityClient};
use std::io::BufRead;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Backend client and user id resolved from flags and config.
pub struct Session {
    pub client: HttpActivityClient,
    pub user_id: String,
}

impl Session {
    pub fn resolve(config: &Config, user: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let client = HttpActivityClient::from_config(config)?;
        let user_id = user.unwrap_or_else(|| config.user.id.clone());
        if user_id.trim().is_empty() {
            return Err("no user id: pass --user or run `echobloom config set user.id <id>`".into());
        }
        Ok(Self { client, user_id })
    }
}

/// One event per line on stdout.
pub fn emit(event: &ActivityEvent) -> CliResult {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}

pub fn emit_all(events: &[ActivityEvent]) -> CliResult {
    for event in events {
        emit(event)?;
    }
    Ok(())
}

/// Next stdin line without its newline, or `None` at EOF.
pub fn read_line(input: &mut impl BufRead) -> Result<Option<String>, std::io::Error> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Prompt on stderr so stdout stays machine-readable.
pub fn ask(prompt: &str) {
    eprintln!("{prompt}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_line_strips_line_endings() {
        let mut input = std::io::Cursor::new("first\r\nsecond\nlast");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("first"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("second"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("last"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn resolve_requires_user_id() {
        let config = Config::default();
        assert!(Session::resolve(&config, None).is_err());
        assert!(Session::resolve(&config, Some("  ".into())).is_err());
        let session = Session::resolve(&config, Some("user_1".into())).unwrap();
        assert_eq!(session.user_id, "user_1");
    }
}
