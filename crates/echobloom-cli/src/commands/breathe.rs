use clap::Args;
use echobloom_core::breathing::format_duration;
use echobloom_core::{now_ms, ActivityEvent, BreathingSession, Config};
use std::time::Duration;

use super::{ask, emit, emit_all, CliResult, Session};

#[derive(Args)]
pub struct BreatheArgs {
    /// Stop after this many full cycles
    #[arg(long, default_value_t = 4)]
    cycles: u32,
    /// Run the exercise without saving it
    #[arg(long)]
    no_save: bool,
}

pub async fn run(args: BreatheArgs, config: &Config, user: Option<String>) -> CliResult {
    if args.cycles == 0 {
        return Err("--cycles must be at least 1".into());
    }
    let backend = if args.no_save {
        None
    } else {
        Some(Session::resolve(config, user)?)
    };

    let mut session = BreathingSession::new()
        .with_technique(config.breathing.technique.clone())
        .with_success_window_ms(config.success_window_ms());

    if let Some(event) = session.start(now_ms()) {
        emit(&event)?;
    }
    ask(session.phase().instruction());

    let mut interval = tokio::time::interval(Duration::from_millis(250));
    while session.cycles_completed() < args.cycles {
        interval.tick().await;
        let events = session.poll(now_ms());
        for event in &events {
            if let ActivityEvent::PhaseChanged { to, .. } = event {
                ask(to.instruction());
            }
        }
        emit_all(&events)?;
    }

    if let Some(event) = session.pause() {
        emit(&event)?;
    }
    ask(&format!(
        "Completed {} cycles in {}",
        session.cycles_completed(),
        format_duration(session.duration_secs())
    ));

    if let Some(backend) = backend {
        let event = session.save(&backend.client, &backend.user_id).await?;
        emit(&event)?;
    }
    Ok(())
}
