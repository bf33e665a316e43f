use echobloom_core::{now_ms, ActivityEvent, Config, GroundingSession};
use std::time::Duration;

use super::{ask, emit_all, read_line, CliResult, Session};

fn ask_step(session: &GroundingSession) {
    let step = session.current_step();
    ask(&format!(
        "{} ({} left) -- {}",
        step.prompt,
        session.remaining_in_step(),
        step.placeholder
    ));
}

pub async fn run(config: &Config, user: Option<String>) -> CliResult {
    let backend = Session::resolve(config, user)?;
    let delay = Duration::from_millis(config.grounding.advance_delay_ms);
    let mut session = GroundingSession::new(now_ms());
    let mut stdin = std::io::stdin().lock();

    ask_step(&session);
    while !session.is_complete() {
        let Some(line) = read_line(&mut stdin)? else {
            return Err(format!(
                "input ended after {} of 15 responses; nothing was saved",
                session.responses().len()
            )
            .into());
        };
        if line.trim().is_empty() {
            continue;
        }

        let events = session.respond(&line, &backend.client, &backend.user_id).await?;
        emit_all(&events)?;

        let advanced = events
            .iter()
            .any(|e| matches!(e, ActivityEvent::GroundingStepAdvanced { .. }));
        if advanced && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if !session.is_complete() {
            ask_step(&session);
        }
    }

    ask("You're here, in this moment.");
    Ok(())
}
