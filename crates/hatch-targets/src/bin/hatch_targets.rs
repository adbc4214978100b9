use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use log::{info, LevelFilter};

use hatch_targets::core::init_with_level;
use hatch_targets::dataset::RegionDataset;
use hatch_targets::run::{log_report, process_dataset, side_of_center, FrameReport};
use hatch_targets::{HatchTargetRecognizer, RecognizerParams};

/// Recognize hatch docking targets in recorded region datasets.
#[derive(Parser, Debug)]
#[command(name = "hatch-targets", version, about)]
struct Cli {
    /// Region dataset JSON (recorded segmentation output, one entry per frame).
    dataset: PathBuf,

    /// Recognizer parameters JSON; built-in defaults when omitted.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Write all frame reports to this JSON file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Fixed delay between frames, in milliseconds.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Log level: error, warn, info, debug or trace.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = LevelFilter::from_str(&cli.log_level).unwrap_or(LevelFilter::Info);
    init_with_level(level)?;

    let params = match &cli.params {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => RecognizerParams::default(),
    };
    let recognizer =
        HatchTargetRecognizer::new(params).map_err(|e| format!("invalid parameters: {e}"))?;

    let dataset = RegionDataset::load(&cli.dataset)?;
    info!(
        "processing {} frame(s) from {}",
        dataset.frames.len(),
        cli.dataset.display()
    );

    let mut reports: Vec<FrameReport> = Vec::new();
    process_dataset(
        &recognizer,
        &dataset,
        Duration::from_millis(cli.delay_ms),
        |report| {
            log_report(&report);
            print_report(&report);
            reports.push(report);
        },
    );

    if let Some(path) = &cli.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&reports)?)?;
        println!("wrote report JSON to {}", path.display());
    }

    Ok(())
}

fn print_report(report: &FrameReport) {
    let label = report.name.as_deref().unwrap_or("frame");
    println!(
        "{} {}: {} target(s)",
        label,
        report.frame_index,
        report.targets.len()
    );
    for (index, target) in report.targets.iter().enumerate() {
        println!(
            "  target {} is {:.1} pixels {} of center",
            index,
            target.offset().abs(),
            side_of_center(target)
        );
    }
}
