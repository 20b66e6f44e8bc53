use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "doctool")]
#[command(about = "Documentation build utilities: Markdown TOC generation and resource embedding", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate the table of contents of a Markdown file
    #[command(alias = "t")]
    Toc {
        /// Markdown source file (defaults to ./main.md)
        #[arg(short, long, value_name = "FILE")]
        source: Option<PathBuf>,

        /// Destination file (defaults to the source file, regenerating in place)
        #[arg(short, long, value_name = "FILE")]
        destination: Option<PathBuf>,
    },

    /// Embed a text resource as a generated C++ string constant
    #[command(alias = "e")]
    Embed {
        /// Text file to embed (defaults to ./default_shader.txt)
        #[arg(short, long, value_name = "FILE")]
        source: Option<PathBuf>,

        /// Basename for the generated source pair (defaults to ./resources.gen)
        #[arg(short, long, value_name = "BASENAME")]
        output: Option<PathBuf>,
    },
}
