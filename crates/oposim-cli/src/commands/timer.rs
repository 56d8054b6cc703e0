use chrono::Utc;
use clap::Subcommand;
use oposim_core::{format_hms, Config, Event, SessionStore, Urgency};
use serde_json::json;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start (or restart) the exam countdown
    Start {
        /// Duration in minutes; defaults to timer.duration_minutes
        #[arg(long)]
        minutes: Option<u32>,
    },
    /// Pause the countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Stop and reset the countdown
    Stop,
    /// Print remaining time
    Status {
        #[arg(long)]
        json: bool,
    },
}

fn print_event(event: Option<Event>) -> Result<(), Box<dyn std::error::Error>> {
    match event {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => println!("{}", json!({ "type": "NoChange" })),
    }
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = SessionStore::open()?;
    let mut session = store.load();

    match action {
        TimerAction::Start { minutes } => {
            let minutes = minutes.unwrap_or(config.timer.duration_minutes);
            let event = session.timer.start(minutes)?;
            print_event(Some(event))?;
        }
        TimerAction::Pause => print_event(session.timer.pause())?,
        TimerAction::Resume => print_event(session.timer.resume())?,
        TimerAction::Stop => print_event(session.timer.stop())?,
        TimerAction::Status { json } => {
            let now = Utc::now();
            let remaining = session.timer.remaining_at(now);
            let urgency = Urgency::classify_with_threshold(
                remaining.num_seconds(),
                config.timer.warning_threshold_secs,
            );
            if json {
                let mut snapshot = serde_json::to_value(session.timer.snapshot_at(now))?;
                snapshot["urgency"] = serde_json::to_value(urgency)?;
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else if !session.timer.is_running() {
                println!("timer stopped");
            } else {
                let paused = if session.timer.is_paused() { " (paused)" } else { "" };
                println!("{}{paused}: {}", urgency.label(), format_hms(remaining));
            }
        }
    }

    store.save(&session)?;
    Ok(())
}
