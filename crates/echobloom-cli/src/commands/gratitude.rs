use echobloom_core::gratitude::MAX_GRATITUDES;
use echobloom_core::{Config, GratitudeSession};
use std::io::BufRead;

use super::{ask, emit, read_line, CliResult, Session};

/// Ask until a non-blank line arrives.
fn ask_required(input: &mut impl BufRead, prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
    loop {
        ask(prompt);
        match read_line(input)? {
            Some(line) if !line.trim().is_empty() => return Ok(line),
            Some(_) => continue,
            None => return Err("input ended before the practice was complete".into()),
        }
    }
}

pub async fn run(config: &Config, user: Option<String>) -> CliResult {
    let backend = Session::resolve(config, user)?;
    let mut session = GratitudeSession::new().with_success_window_ms(config.success_window_ms());
    let mut stdin = std::io::stdin().lock();

    for i in 1..=MAX_GRATITUDES {
        let text = ask_required(&mut stdin, &format!("{i}. I'm grateful for..."))?;
        let reason = ask_required(&mut stdin, "   because...")?;
        emit(&session.add_filled(&text, &reason)?)?;
    }
    let proud = ask_required(&mut stdin, "Something I'm proud of today:")?;
    session.set_proud_moment(&proud);

    if !session.can_complete() {
        return Err(format!("incomplete: {}", session.missing_fields().join(", ")).into());
    }
    emit(&session.save(&backend.client, &backend.user_id).await?)?;
    Ok(())
}
