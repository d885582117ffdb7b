use crate::demo::{run_catalog, run_demo, run_score, CatalogCommand, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use disc_assessment::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "DISC Assessment",
    about = "Score DISC behavioural-style questionnaires and serve the assessment API",
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
    /// Score a CSV answer sheet and print or export the report
    Score(ScoreArgs),
    /// List the active question catalog or profile table
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Fill every question with one rank pattern and print the resulting report
    Demo(DemoArgs),
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
        Command::Score(args) => run_score(args),
        Command::Catalog { command } => run_catalog(command),
        Command::Demo(args) => run_demo(args),
    }
}
