use crate::reports;
use clap::Args;
use fingerforge::error::FfResult;
use fingerforge::model::CalibrationTables;

#[derive(Args, Debug, Clone)]
pub struct TablesArgs {
    /// Directory of calibration tables to check
    #[arg(short, long)]
    pub tables: String,
}

pub fn run(args: &TablesArgs) -> FfResult<()> {
    let tables = CalibrationTables::load_dir(&args.tables)?;

    println!("\n🔎 === CALIBRATION TABLES: {} === 🔎", args.tables);
    for key in tables.keys() {
        if let Some(matrix) = tables.get(key) {
            reports::matrix(key, matrix);
        }
    }
    println!("{} tables OK", tables.len());
    Ok(())
}
