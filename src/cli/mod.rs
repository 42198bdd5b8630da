//! CLI module - Command-line interface for Roteirista
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

use crate::export::ExportFormat;

/// Roteirista - Video script assistant
/// Builds templated YouTube scripts with image, animation, SFX and soundtrack prompts
#[derive(Parser)]
#[command(name = "roteirista")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web form and API server (default)
    #[command(alias = "web", alias = "daemon")]
    Serve,

    /// Generate one script and print or save it
    #[command(alias = "g")]
    Generate {
        /// Theme or idea of the video
        #[arg(required = true)]
        tema: Vec<String>,

        /// Style tag (terror, misterio, ficcao, drama, comedia, acao, motivacional, educativo)
        #[arg(short, long)]
        estilo: Option<String>,

        /// Duration bucket (curto, medio, longo)
        #[arg(short, long)]
        duracao: Option<String>,

        /// Output encoding
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Txt)]
        format: ExportFormat,

        /// Write to this file, or pass a directory to use the generated file name
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List supported styles and durations
    #[command(alias = "ls")]
    Styles,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
