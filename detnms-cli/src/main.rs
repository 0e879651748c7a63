use clap::Parser;
use detnms::{BBox, Detection, PostprocessConfig, Postprocessor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "detnms CLI: score filter + NMS over JSON detections")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for each post-processing stage.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize, Serialize)]
struct DetectionRecord {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    score: f32,
    #[serde(default)]
    class_id: usize,
    #[serde(default)]
    class_label: String,
}

impl From<DetectionRecord> for Detection {
    fn from(value: DetectionRecord) -> Self {
        Detection::new(
            BBox::new(value.x1, value.y1, value.x2, value.y2),
            value.score,
            value.class_id,
            value.class_label,
        )
    }
}

impl From<Detection> for DetectionRecord {
    fn from(value: Detection) -> Self {
        Self {
            x1: value.bbox.x1,
            y1: value.bbox.y1,
            x2: value.bbox.x2,
            y2: value.bbox.y2,
            score: value.score,
            class_id: value.class_id,
            class_label: value.class_label,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Config {
    detections: Vec<DetectionRecord>,
    #[serde(default = "default_score_threshold")]
    score_threshold: f32,
    #[serde(default = "default_iou_threshold")]
    iou_threshold: f32,
    #[serde(default)]
    per_class: bool,
    #[serde(default)]
    output_path: Option<String>,
}

fn default_score_threshold() -> f32 {
    PostprocessConfig::default().score_threshold
}

fn default_iou_threshold() -> f32 {
    PostprocessConfig::default().iou_threshold
}

#[derive(Debug, Serialize)]
struct Output {
    count: usize,
    detections: Vec<DetectionRecord>,
}

fn run_config(config: Config) -> Result<Output, detnms::DetNmsError> {
    let postprocessor = Postprocessor::new().with_config(PostprocessConfig {
        score_threshold: config.score_threshold,
        iou_threshold: config.iou_threshold,
        per_class: config.per_class,
        parallel: false,
    });

    let raw: Vec<Detection> = config.detections.into_iter().map(Detection::from).collect();
    let kept = postprocessor.process(raw)?;
    Ok(Output {
        count: kept.len(),
        detections: kept.into_iter().map(DetectionRecord::from).collect(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("detnms=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    let output_path = config.output_path.clone();

    let output = run_config(config)?;
    tracing::info!(kept = output.count, "post-processing finished");
    let json = serde_json::to_string_pretty(&output)?;

    match output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
