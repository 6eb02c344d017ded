use std::io::BufRead;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError};
use serde_json::json;

use popup_wizard::{
    AppResult, PresentationLifecycle, RenderToken, Step, WizardCommand, WizardConfig,
    WizardEvent,
};

const LOG_TARGET_STARTUP: &str = "popup_wizard::startup";

/// Initialize tracing with file rotation
///
/// Logs are written to `<config dir>/PopupWizard/logs/popup-wizard.YYYY-MM-DD.log`.
/// Debug builds also log to stderr so stdout stays a clean JSON stream.
fn initialize_tracing(config: &WizardConfig) {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = WizardConfig::config_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|_| std::path::PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, "popup-wizard.log");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!(target: LOG_TARGET_STARTUP, "Log directory: {}", log_dir.display());
}

/// A three-step onboarding flow used by the demo
fn demo_sequence() -> Vec<Step> {
    [
        ("Welcome", "Let's get you set up."),
        ("Preferences", "Pick the defaults you like."),
        ("Done", "You're all set."),
    ]
    .into_iter()
    .map(|(title, body)| {
        Step::new(RenderToken::new(body.to_string()))
            .with_header(RenderToken::new(title.to_string()))
    })
    .collect()
}

/// Forward stdin lines to the event loop. The channel closes on EOF.
fn spawn_input_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();

    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    rx
}

/// Print one JSON line per batch of events that changed the state.
///
/// Intermediate states in a batch are only logged; the printed line comes
/// from a single snapshot so the title always matches the state.
fn render(wizard: &PresentationLifecycle, events: &Receiver<WizardEvent>) -> AppResult<()> {
    let mut changed = false;
    for event in events.try_iter() {
        if matches!(event, WizardEvent::StateChanged(_)) {
            changed = true;
        }
        tracing::debug!("{}", event.description());
    }
    if !changed {
        return Ok(());
    }

    let snapshot = wizard.snapshot();
    let title = snapshot
        .current_step()
        .and_then(|s| s.header())
        .and_then(|h| h.downcast_ref::<String>())
        .cloned();
    let line = json!({ "state": snapshot.state, "title": title });
    println!("{}", serde_json::to_string(&line).context("Failed to encode state")?);
    Ok(())
}

fn main() -> AppResult<()> {
    let config = WizardConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: {}, using defaults", e);
        WizardConfig::default()
    });

    initialize_tracing(&config);
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting popup-wizard v{} (animation {}ms)",
        env!("CARGO_PKG_VERSION"),
        config.animation.duration_ms
    );

    let mut wizard = PresentationLifecycle::new(config.animation);
    let (events, _id) = wizard.events().subscribe();
    wizard
        .set_sequence(demo_sequence())
        .context("Failed to register demo sequence")?;

    let input = spawn_input_reader();
    eprintln!("Commands: show, next, back, dismiss, animate, quit");

    loop {
        let received = match wizard.next_deadline() {
            Some(deadline) => {
                input.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => input.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(line) if line.trim().is_empty() => {}
            Ok(line) => match line.parse::<WizardCommand>() {
                Ok(WizardCommand::Quit) => break,
                Ok(command) => {
                    if let Err(e) = wizard.execute(command) {
                        eprintln!("{}", e);
                    }
                }
                Err(e) => eprintln!("{}", e),
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        wizard.poll();
        render(&wizard, &events)?;
    }

    // Let an in-flight animated dismissal land before exiting.
    if let Some(deadline) = wizard.next_deadline() {
        thread::sleep(deadline.saturating_duration_since(Instant::now()));
        wizard.poll();
        render(&wizard, &events)?;
    }

    tracing::info!(target: LOG_TARGET_STARTUP, "Exiting");
    Ok(())
}
