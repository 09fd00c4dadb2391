//! Refactory - Code Smell & Refactoring Catalog CLI

use clap::Parser;

use refactory::cli::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let app = App::parse();

    // Initialize logging. Diagnostics go to stderr so that JSON output
    // on stdout stays machine-readable.
    let filter = if app.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    app.run()
}
