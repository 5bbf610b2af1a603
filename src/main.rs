use crate::config::Config;
use crate::loaders::Loader;
use crate::model::SeatingMode;
use clap::Parser;
use eyre::Result;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

mod checks;
mod config;
mod display;
mod engine;
mod export;
mod loaders;
mod model;

#[derive(Parser)]
#[command(version, about = "Generate constraint-respecting exam seating plans")]
struct Args {
    /// Use FILE instead of autoseater.toml
    #[arg(short, long, value_name = "FILE", default_value = "autoseater.toml")]
    config: PathBuf,
    /// Exam to generate seating plans for
    #[arg(short, long, value_name = "EXAM_ID")]
    exam: String,
    /// Room to fill, repeatable; rooms are filled in the order given
    #[arg(short, long = "room", value_name = "ROOM_ID", required = true)]
    rooms: Vec<String>,
    /// Seating mode
    #[arg(short, long, value_enum)]
    mode: SeatingMode,
    /// Do not write back results to database
    #[arg(short = 'n', long)]
    dry_run: bool,
    /// Also write the generated plans to a CSV file
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
    sqlx::any::install_default_drivers();
    let config = Config::load(&args.config)?;
    let mut loader = Loader::new(&config.database.url).await?;
    let exam = loader.load_exam(&args.exam).await?;
    let rooms = loader.load_rooms(&args.rooms).await?;
    let students = loader.load_students().await?;
    info!(
        exam = %exam.name,
        rooms = rooms.len(),
        students = students.len(),
        "snapshot loaded"
    );
    let result = engine::generate(&exam, &rooms, &students, args.mode)?;
    checks::ensure_consistent(&result)?;
    checks::report_shortfall(&result);
    checks::report_adjacency_violations(&result);
    if !args.dry_run {
        loader.save_plans(&exam.id, &result.plans).await?;
    }
    display::display_details(&result, &rooms);
    display::display_totals(&result, &rooms);
    if let Some(path) = &args.export {
        export::export_csv(path, &result, &rooms)?;
    }
    Ok(())
}
