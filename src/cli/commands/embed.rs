use log::error;
use std::path::PathBuf;
use std::process;

use crate::embed;

/// Handle the embed command
pub fn handle_embed_command(source: Option<&PathBuf>, output: Option<&PathBuf>) {
    let source = source
        .cloned()
        .unwrap_or_else(|| PathBuf::from("default_shader.txt"));
    let output = output
        .cloned()
        .unwrap_or_else(|| PathBuf::from("resources.gen"));

    if let Err(e) = embed::embed_resource(&source, &output) {
        error!("Failed to embed resource: {}", e);
        process::exit(1);
    }
}
