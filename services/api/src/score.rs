use crate::infra::load_engine;
use clap::Args;
use market_value::config::AppConfig;
use market_value::error::AppError;
use market_value::scoring::ScoreResult;
use market_value::telemetry;
use market_value::valuation::{ScoreRequest, TracingAggregateSink, Valuation, ValuationService};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON request file, or `-` to read from stdin
    #[arg(long, default_value = "-")]
    pub(crate) input: PathBuf,
    /// Print the full valuation as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let raw = read_input(&args.input)?;
    let request: ScoreRequest = serde_json::from_str(&raw)?;

    let engine = load_engine(&config.benchmarks)?;
    let service = ValuationService::new(engine, Arc::new(TracingAggregateSink));
    let valuation = service.evaluate(request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&valuation)?);
    } else {
        print!("{}", render_summary(&valuation));
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn render_summary(valuation: &Valuation) -> String {
    let ScoreResult {
        role_category,
        residence_tier,
        exp_band,
        annual_usd,
        real_value_usd,
        gap_usd,
        gap_pct,
        label,
        strengths,
        weaknesses,
    } = &valuation.result;

    let mut out = String::new();
    out.push_str("Market value estimate\n");
    out.push_str(&format!(
        "  Role category: {role_category} (tier {residence_tier}, {exp_band} years)\n"
    ));
    out.push_str(&format!("  Stated compensation: {}\n", format_usd(*annual_usd)));
    out.push_str(&format!("  Real value: {}\n", format_usd(*real_value_usd)));
    out.push_str(&format!(
        "  Gap: {} ({:+.1}%)\n",
        format_usd(*gap_usd),
        gap_pct * 100.0
    ));
    out.push_str(&format!("  Label: {label}\n"));
    out.push_str(&format!("  Strengths: {}\n", list_or_none(strengths)));
    out.push_str(&format!("  Weaknesses: {}\n", list_or_none(weaknesses)));
    if valuation.aggregate.is_some() {
        out.push_str("  Anonymized aggregate record published\n");
    }
    out
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Whole-dollar amount with thousands separators, e.g. `-$46,750`.
fn format_usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
