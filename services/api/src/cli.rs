use crate::demo::{run_demo, DemoArgs};
use crate::packs::{list_letters, resolve_pack, write_table, ResolveArgs, TableArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nfdiv_packs::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "nfdiv-packs",
    about = "Resolve and print divorce and dissolution document packs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the document pack catalog
    Packs {
        #[command(subcommand)]
        command: PacksCommand,
    },
    /// Walk a sample case through its letters and print the packs it receives
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PacksCommand {
    /// List every registered letter id
    List,
    /// Resolve the pack a case would receive for a letter
    Resolve(ResolveArgs),
    /// Export the letter, pack and template decision table as CSV
    Table(TableArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Packs { command } => match command {
            PacksCommand::List => list_letters(),
            PacksCommand::Resolve(args) => resolve_pack(args),
            PacksCommand::Table(args) => write_table(args),
        },
        Command::Demo(args) => run_demo(args),
    }
}
