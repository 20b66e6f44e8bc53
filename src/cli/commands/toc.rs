use log::error;
use std::path::PathBuf;
use std::process;

use crate::toc;

/// Handle the toc command
pub fn handle_toc_command(source: Option<&PathBuf>, destination: Option<&PathBuf>) {
    let source = source
        .cloned()
        .unwrap_or_else(|| PathBuf::from("main.md"));
    let destination = destination.cloned().unwrap_or_else(|| source.clone());

    if let Err(e) = toc::generate_toc(&source, &destination) {
        error!("Failed to generate TOC: {}", e);
        process::exit(1);
    }
}
