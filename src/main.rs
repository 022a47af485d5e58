//! todo-e2e - seed a todo application's database, then visit it
//!
//! Generates a fresh batch of todos, hands it to the `db:seed` task and
//! loads the application root so the seeded state renders.

use clap::Parser;
use todo_e2e::commands::{Commands, GlobalArgs};
use todo_e2e::{cli, common::logging};

#[derive(Parser)]
#[command(name = "todo-e2e", about = "Seed-then-visit end-to-end runner")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Held until exit so the file writer flushes
    let _log_guard = logging::init_cli(cli.global.log_file);

    if let Err(e) = cli::dispatch(cli.command, cli.global).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
