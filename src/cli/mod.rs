pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match &cli.command {
        Some(types::Commands::Toc { source, destination }) => {
            commands::handle_toc_command(source.as_ref(), destination.as_ref());
        }
        Some(types::Commands::Embed { source, output }) => {
            commands::handle_embed_command(source.as_ref(), output.as_ref());
        }
        None => {
            // Default to regenerating main.md in place if no subcommand given
            commands::handle_toc_command(None, None);
        }
    }
}
