use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use scene_prompts::settings::Settings;

#[derive(Parser)]
#[command(
    name = "scene_prompts",
    about = "Extract scene prompts from a storyboard markdown file into JSON"
)]
struct Cli {
    /// Markdown document to scan (default: prompts_for_user.md, env SCENES_INPUT)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// JSON file to write (default: parsed_prompts.json, env SCENES_OUTPUT)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.input, cli.output).context("resolving settings")?;
    info!(input = %settings.input.display(), output = %settings.output.display(), "extracting scenes");

    let extraction = scene_prompts::run(&settings)?;
    println!(
        "Parsed {} scenes to {}",
        extraction.scenes.len(),
        settings.output.display()
    );
    Ok(())
}
