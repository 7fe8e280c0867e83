use anyhow::Context;
use clap::Parser;
use statcore::descriptive;

mod generator;
mod input;

#[derive(Parser)]
#[command(author, version, about = "Command-line driver for the statistics core")]
struct Args {
    /// Numeric values to summarize
    values: Vec<String>,
    /// Inline JSON array payload
    #[arg(long, conflicts_with = "synthetic")]
    json: Option<String>,
    /// Generate a synthetic series of this many values
    #[arg(long)]
    synthetic: Option<usize>,
    /// Seed for the synthetic series
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Emit the summary as JSON
    #[arg(long, default_value_t = false)]
    emit_json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let values = if let Some(payload) = args.json.as_deref() {
        input::decode_json(payload).context("decoding JSON payload")?
    } else if let Some(count) = args.synthetic {
        generator::build_series(count, args.seed)
    } else if !args.values.is_empty() {
        input::parse_tokens(&args.values).context("parsing value tokens")?
    } else {
        anyhow::bail!("no input values; pass tokens, --json, or --synthetic");
    };

    log::info!("summarizing {} values", values.len());
    let summary = descriptive::describe(&values).context("evaluating summary")?;

    if args.emit_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Summary -> count {}, average {:.4}, variance {:.4}, stdev {:.4}",
            summary.count, summary.average, summary.variance, summary.stdev
        );
    }

    Ok(())
}
