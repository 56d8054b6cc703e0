use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "oposim", version, about = "OpoSim: exam topic lottery simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chance that at least one studied topic is drawn
    Probability(commands::probability::ProbabilityArgs),
    /// Simulate a lottery draw and store it in the session
    Draw(commands::draw::DrawArgs),
    /// Choose the drawn topic to present (1-based position)
    Select {
        position: usize,
    },
    /// Forget the current draw and stop the timer
    Clear,
    /// Show the current draw and selected topic
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Exam timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("OPOSIM_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Probability(args) => commands::probability::run(args),
        Commands::Draw(args) => commands::draw::run(args),
        Commands::Select { position } => commands::draw::select(position),
        Commands::Clear => commands::draw::clear(),
        Commands::Show { json } => commands::draw::show(json),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
