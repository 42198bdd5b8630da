//! Generate command handler

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::generator::ScriptGenerator;
use crate::models::{GenerationRequest, Style};

pub struct GenerateArgs {
    pub tema: Vec<String>,
    pub estilo: Option<String>,
    pub duracao: Option<String>,
    pub format: ExportFormat,
    pub output: Option<String>,
}

pub async fn cmd_generate(config: &Config, args: GenerateArgs) -> anyhow::Result<()> {
    let request = GenerationRequest::new(
        args.tema.join(" "),
        args.estilo
            .unwrap_or_else(|| config.generation.default_style.clone()),
        args.duracao
            .unwrap_or_else(|| config.generation.default_duration.clone()),
    );

    if request.style().is_none() {
        eprintln!(
            "Unknown style '{}', using '{}' templates",
            request.style,
            Style::FALLBACK
        );
    }

    let script = ScriptGenerator::new(&config.generation).generate(&request);
    let content = export::render(&script, args.format)?;

    let Some(output) = args.output else {
        print!("{}", content);
        return Ok(());
    };

    let path = resolve_output_path(Path::new(&output), &export::file_name(&script, args.format));

    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write script to {}", path.display()))?;

    info!("Script saved to {}", path.display());
    println!("✓ {} ({} scenes) -> {}", script.title, script.scenes.len(), path.display());

    Ok(())
}

fn resolve_output_path(output: &Path, file_name: &str) -> PathBuf {
    if output.is_dir() {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}
