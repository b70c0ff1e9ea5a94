//! Defines the command-line interface for the application.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pyxis-sync",
    version,
    about = "Publish a container repository description to the Pyxis catalog API."
)]
pub struct Cli {
    /// Resolve and print the description HTML without calling the API.
    #[arg(long)]
    pub dry_run: bool,
}
