// Module declarations
mod cli;
mod embed;
mod toc;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}
