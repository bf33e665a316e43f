//! Line-driven journal walker.
//!
//! Every plain line answers the current prompt and moves on. Lines starting
//! with `:` are commands: `:next`, `:prev`, `:save`, `:done`. End of input
//! behaves like `:done` (save, then exit).

use clap::Args;
use echobloom_core::journal::CATEGORIES;
use echobloom_core::{Config, JournalSession};

use super::{ask, emit, read_line, CliResult, Session};

#[derive(Args)]
pub struct JournalArgs {
    /// Category name or 1-based number (asked interactively when omitted)
    #[arg(long)]
    category: Option<String>,
}

enum Command<'a> {
    Next,
    Previous,
    Save,
    Done,
    Answer(&'a str),
    Unknown(&'a str),
}

fn parse(line: &str) -> Command<'_> {
    match line.trim() {
        ":next" | ":n" => Command::Next,
        ":prev" | ":p" => Command::Previous,
        ":save" | ":s" => Command::Save,
        ":done" | ":q" => Command::Done,
        other if other.starts_with(':') => Command::Unknown(other),
        _ => Command::Answer(line),
    }
}

fn ask_prompt(session: &JournalSession) {
    if let Some(prompt) = session.current_prompt() {
        ask(&format!("[{}/5] {prompt}", session.index() + 1));
    }
}

pub async fn run(args: JournalArgs, config: &Config, user: Option<String>) -> CliResult {
    let backend = Session::resolve(config, user)?;
    let mut session = JournalSession::new().with_success_window_ms(config.success_window_ms());
    let mut stdin = std::io::stdin().lock();

    let key = match args.category {
        Some(key) => key,
        None => {
            for (i, c) in CATEGORIES.iter().enumerate() {
                ask(&format!("{}. {} -- {}", i + 1, c.name, c.description));
            }
            ask("Choose your focus:");
            read_line(&mut stdin)?.ok_or("no category chosen")?
        }
    };
    emit(&session.select_category(&key)?)?;
    ask_prompt(&session);

    loop {
        let Some(line) = read_line(&mut stdin)? else {
            emit(&session.save(&backend.client, &backend.user_id).await?)?;
            return Ok(());
        };
        match parse(&line) {
            Command::Answer(text) => {
                session.set_response(text)?;
                if let Some(event) = session.next() {
                    emit(&event)?;
                }
                ask_prompt(&session);
            }
            Command::Next => {
                if let Some(event) = session.next() {
                    emit(&event)?;
                }
                ask_prompt(&session);
            }
            Command::Previous => {
                if let Some(event) = session.previous() {
                    emit(&event)?;
                }
                ask_prompt(&session);
            }
            Command::Save => {
                emit(&session.save(&backend.client, &backend.user_id).await?)?;
            }
            Command::Done => {
                emit(&session.save(&backend.client, &backend.user_id).await?)?;
                return Ok(());
            }
            Command::Unknown(cmd) => {
                ask(&format!("unknown command {cmd}; use :next :prev :save :done"));
            }
        }
    }
}
