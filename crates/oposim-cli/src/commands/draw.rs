use std::path::PathBuf;

use clap::Args;
use oposim_core::{
    draw_topics, generate_default_topics, parse_text_topics, Config, SessionStore, Topic,
    ValidationError,
};

#[derive(Args)]
pub struct DrawArgs {
    /// Text file with one topic per line
    #[arg(long)]
    file: Option<PathBuf>,
    /// Size of the generated syllabus when no file is given
    #[arg(long)]
    total: Option<u32>,
    /// Balls drawn in the lottery
    #[arg(long)]
    drawn: Option<usize>,
    /// Seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn load_syllabus(
    args: &DrawArgs,
    config: &Config,
) -> Result<Vec<Topic>, Box<dyn std::error::Error>> {
    match &args.file {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            parse_text_topics(&text).ok_or_else(|| {
                ValidationError::EmptyCollection(format!("no topics found in {}", path.display()))
                    .into()
            })
        }
        None => Ok(generate_default_topics(
            args.total.unwrap_or(config.draw.total_topics),
        )),
    }
}

fn print_topics(topics: &[Topic], selected: Option<usize>) {
    for (i, topic) in topics.iter().enumerate() {
        let marker = if selected == Some(i) { "*" } else { " " };
        println!("{marker} {}. Topic {}: {}", i + 1, topic.number, topic.name);
    }
}

pub fn run(args: DrawArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let syllabus = load_syllabus(&args, &config)?;
    let balls = args.drawn.unwrap_or(config.draw.balls_drawn as usize);
    if balls == 0 {
        return Err(oposim_core::InvalidParameter::NonPositiveDrawn { drawn: 0 }.into());
    }

    let store = SessionStore::open()?;
    let mut session = store.load();
    let drawn = draw_topics(&syllabus, balls, args.seed);
    let event = session.new_draw(drawn);
    store.save(&session)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(session.drawn())?);
    } else {
        println!("Drew {} of {} topics:", session.drawn().len(), syllabus.len());
        print_topics(session.drawn(), None);
    }
    tracing::debug!(?event, "draw stored");
    Ok(())
}

pub fn select(position: usize) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;
    let mut session = store.load();
    // Positions are 1-based on the command line.
    let index = position.checked_sub(1).ok_or(ValidationError::OutOfBounds {
        collection: "drawn topics".into(),
        index: position,
        len: session.drawn().len(),
    })?;
    let event = session.select(index)?;
    store.save(&session)?;

    if let Some(topic) = session.selected_topic() {
        println!("Topic to present: {} - {}", topic.number, topic.name);
    }
    if event.is_none() {
        println!("(already selected, timer untouched)");
    }
    Ok(())
}

pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;
    let mut session = store.load();
    session.clear();
    store.save(&session)?;
    println!("draw cleared");
    Ok(())
}

pub fn show(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = SessionStore::open()?.load();
    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }
    if session.drawn().is_empty() {
        println!("no draw yet; run `oposim draw`");
        return Ok(());
    }
    print_topics(session.drawn(), session.selected_index());
    Ok(())
}
