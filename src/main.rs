//! Headless viewer run: load the startup documents, apply filters, print
//! the derived view, and write the report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use detview::app::App;
use detview::config::AppConfig;
use detview::filter::ClassFilter;
use detview::format;
use detview::message::Message;
use detview::report::{RenderReport, TextRenderer};

#[derive(Debug, Parser)]
#[command(name = "detview", about = "Detection results viewer, headless run")]
struct Args {
    /// Detections document (JSON)
    detections: PathBuf,

    /// Tiles document (JSON)
    #[arg(long)]
    tiles: Option<PathBuf>,

    /// Run-metrics document (JSON)
    #[arg(long)]
    metrics: Option<PathBuf>,

    /// Configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only keep detections of this class
    #[arg(long)]
    class: Option<String>,

    /// Minimum confidence threshold
    #[arg(long, default_value_t = 0.0)]
    min_confidence: f64,

    /// Report output path; defaults to detection-report.<ext>
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match AppConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to read config {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };

    let default_filter = config.preferences.log_level.to_level_filter().to_string();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();

    match format::load_scene(
        &args.detections,
        args.tiles.as_deref(),
        args.metrics.as_deref(),
    ) {
        Ok(scene) => app.update(Message::SceneLoaded(scene)),
        Err(err) => {
            // Mirror the interactive shell: the app lands in its terminal
            // error phase, and the run reports the same failure.
            app.update(Message::LoadFailed(err.to_string()));
            return Err(err.into());
        }
    }

    if let Some(class) = &args.class {
        app.update(Message::ClassFilterChanged(ClassFilter::Label(
            class.clone(),
        )));
    }
    if args.min_confidence > 0.0 {
        app.update(Message::MinConfidenceChanged(args.min_confidence));
    }

    let labels = app.labels();
    let filtered = app.filtered_detections();
    let fit = app.viewport();

    println!("classes: {}", labels.join(", "));
    println!("detections after filters: {}", filtered.len());
    println!(
        "viewport: [[{:.5}, {:.5}], [{:.5}, {:.5}]] (padding {})",
        fit.region.min.lat, fit.region.min.lon, fit.region.max.lat, fit.region.max.lon, fit.padding,
    );

    let renderer = TextRenderer;
    let report = app.export_report();
    let output = args.output.clone().unwrap_or_else(|| {
        PathBuf::from(format!("detection-report.{}", renderer.file_extension()))
    });
    std::fs::write(&output, renderer.render(&report))?;
    log::info!("report written to {}", output.display());

    Ok(())
}
