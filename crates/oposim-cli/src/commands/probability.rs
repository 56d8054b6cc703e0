use clap::Args;
use oposim_core::{Config, DrawParameters, ProbabilityTier};
use serde::Serialize;

#[derive(Args)]
pub struct ProbabilityArgs {
    /// Total topics in the syllabus (N)
    #[arg(long, allow_negative_numbers = true)]
    total: Option<i64>,
    /// Topics studied (k)
    #[arg(long, allow_negative_numbers = true)]
    studied: Option<i64>,
    /// Balls drawn in the lottery (n)
    #[arg(long, allow_negative_numbers = true)]
    drawn: Option<i64>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ProbabilityReport {
    #[serde(flatten)]
    params: DrawParameters,
    probability: f64,
    percentage: f64,
    coverage_pct: f64,
    tier: ProbabilityTier,
}

pub fn run(args: ProbabilityArgs) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = Config::load_or_default().draw_parameters();
    let params = DrawParameters::new(
        args.total.unwrap_or(defaults.total_topics),
        args.studied.unwrap_or(defaults.studied_topics),
        args.drawn.unwrap_or(defaults.balls_drawn),
    );

    let probability = params.probability()?;
    let tier = ProbabilityTier::classify(probability);
    let report = ProbabilityReport {
        params,
        probability,
        percentage: probability * 100.0,
        coverage_pct: params.coverage() * 100.0,
        tier,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "P(X >= 1) = 1 - C(N-k, n) / C(N, n)   N={} k={} n={}",
            params.total_topics, params.studied_topics, params.balls_drawn
        );
        println!("Probability: {:.1}%", report.percentage);
        println!("Syllabus studied: {:.1}%", report.coverage_pct);
        println!("{}", tier.message());
    }
    Ok(())
}
