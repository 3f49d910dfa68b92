use crate::reports;
use clap::Args;
use fingerforge::api::build_model;
use fingerforge::config::ModelConfig;
use fingerforge::error::FfResult;
use fingerforge::scorer::loader::{load_notes_from_file, parse_fingering};
use fingerforge::scorer::CostAccumulator;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: ModelConfig,

    /// CSV of `pitch,onset` rows
    #[arg(short, long)]
    pub notes: String,

    /// Comma-separated finger indices, one per note (e.g. `0,2,4`)
    #[arg(short, long)]
    pub fingering: String,
}

pub fn run(args: &ScoreArgs, config: &ModelConfig) -> FfResult<()> {
    let model = build_model(config)?;

    info!("📂 Loading Notes: {}", args.notes);
    let notes = load_notes_from_file(&args.notes)?;
    let fingering = parse_fingering(&args.fingering)?;

    let accumulator = CostAccumulator::new(&model, &notes)?;
    let breakdown = accumulator.transition_costs(&fingering)?;
    let total = accumulator.total_cost(&fingering)?;

    println!("\n🎼 === FINGERING COST ({} model) === 🎼", model.name());
    reports::transitions(&breakdown);
    println!("Total: {:.3}", total);
    Ok(())
}
