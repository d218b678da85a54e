use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use careplan_core::{RenderEngine, ReportConfig, ReportError};
use careplan_render::{JsonBlockRenderer, TextPageRenderer};
use careplan_report::generate;
use careplan_store::{InMemoryRecordStore, RecordStore, RestRecordStore, StoreConfig};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "careplan", about = "Xuất báo cáo care plan ra file.")]
struct Args {
    /// Mã care plan cần xuất.
    care_plan_id: String,
    /// File đầu ra; mặc định care_plan_<id>.txt (hoặc .json).
    output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Đọc bản ghi từ file JSON thay vì gọi record store.
    #[arg(long)]
    records: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("careplan=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(path) => {
            println!("✓ Care plan report generated: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<PathBuf> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.care_plan_id, args.format));

    let store = open_store(args.records.as_deref())?;
    let engine: Box<dyn RenderEngine> = match args.format {
        OutputFormat::Text => Box::new(TextPageRenderer::default()),
        OutputFormat::Json => Box::new(JsonBlockRenderer),
    };

    generate(
        store.as_ref(),
        engine.as_ref(),
        &args.care_plan_id,
        &output,
        &ReportConfig::default(),
    )?;
    Ok(output)
}

fn open_store(records: Option<&Path>) -> anyhow::Result<Box<dyn RecordStore>> {
    match records {
        Some(path) => {
            let dump = std::fs::read_to_string(path)
                .with_context(|| format!("Không đọc được file {:?}", path))?;
            let store = InMemoryRecordStore::from_json_str(&dump)
                .with_context(|| format!("File bản ghi {:?} không hợp lệ", path))?;
            Ok(Box::new(store))
        }
        None => {
            let config = StoreConfig::from_env().context("Thiếu cấu hình record store")?;
            Ok(Box::new(RestRecordStore::new(config)?))
        }
    }
}

fn default_output(care_plan_id: &str, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("care_plan_{care_plan_id}.{}", format.extension()))
}

fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ReportError>() {
        Some(ReportError::NotFound(id)) => format!("Error: Could not load care plan {id}"),
        _ => format!("Error: {err:#}"),
    }
}
