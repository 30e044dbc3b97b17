//! `outpaint` CLI - extend an image beyond its borders with a remote image edit service.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use outpaint_lib::{
    load_config_file, prepare_inputs, run_outpaint, OpenAiEditService, OutpaintConfig,
    OutpaintError, CANVAS_HEIGHT, CANVAS_WIDTH,
};

/// Outpaint an image through the OpenAI image edit endpoint.
#[derive(Parser, Debug)]
#[command(name = "outpaint")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON settings file (camelCase keys, all optional).
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate, normalize, request the edit, then download and resize the results.
    Run(RunArgs),
    /// Center an image on a transparent canvas and save it as the source and mask.
    Prepare(PrepareArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Text prompt describing what to paint.
    #[arg(short, long)]
    prompt: Option<String>,

    /// Number of variants to request (1-10).
    #[arg(short = 'n', long = "number", value_name = "INT")]
    number_of_images: Option<u32>,

    /// Model name sent with the edit request.
    #[arg(long)]
    model: Option<String>,

    /// Size requested from the edit service, e.g. 1024x1024.
    #[arg(long)]
    size: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    yes: bool,
}

#[derive(Args, Debug)]
struct PrepareArgs {
    /// Image to center on the canvas.
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = CANVAS_WIDTH, value_name = "INT")]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = CANVAS_HEIGHT, value_name = "INT")]
    height: u32,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("outpaint={log_level},outpaint_lib={log_level},imageapi={log_level}")
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Failures are reported, not turned into exit codes.
    if let Err(err) = run(cli).await {
        tracing::error!("{}", failure_message(&err));
    }
}

fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<OutpaintError>() {
        Some(run_err) => format!("{}: {run_err}", run_err.kind().describe()),
        None => format!("{err:#}"),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = OutpaintConfig::default();
    if let Some(path) = &cli.config {
        config = config.with_file(load_config_file(path)?);
    }

    match cli.command {
        Command::Prepare(args) => {
            prepare_inputs(&config, &args.image, args.width, args.height)?;
            println!(
                "Prepared {} and {}",
                config.src_image_path().display(),
                config.mask_image_path().display()
            );
        }
        Command::Run(args) => {
            let config = apply_run_args(config, &args).with_env();

            if !args.yes && !ask_to_start().context("Failed to read confirmation")? {
                println!("Exiting without processing.");
                return Ok(());
            }

            let service = OpenAiEditService::new(
                config.api_key().unwrap_or_default(),
                &config.endpoint,
                config.model.clone(),
                config.size.clone(),
            );
            let report = run_outpaint(&config, &service).await?;

            for path in &report.outputs {
                println!("Saved {}", path.display());
            }
        }
    }

    Ok(())
}

fn apply_run_args(mut config: OutpaintConfig, args: &RunArgs) -> OutpaintConfig {
    if let Some(prompt) = &args.prompt {
        config.prompt = prompt.clone();
    }
    if let Some(n) = args.number_of_images {
        config.number_of_images = n;
    }
    if let Some(model) = &args.model {
        config.model = Some(model.clone());
    }
    if let Some(size) = &args.size {
        config.size = Some(size.clone());
    }
    config
}

fn ask_to_start() -> io::Result<bool> {
    print!("Start image processing? (y/n): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
