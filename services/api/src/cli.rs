use crate::commands::{run_analyze, run_benchmarks, AnalyzeArgs, BenchmarksArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use eco_benchmark::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Eco Benchmark",
    about = "Score proposed raw-material consumption against size-tiered sustainability benchmarks",
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
    /// Analyze a material plan from the command line
    Analyze(AnalyzeArgs),
    /// Print the reference benchmark table
    Benchmarks(BenchmarksArgs),
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
        Command::Analyze(args) => run_analyze(args),
        Command::Benchmarks(args) => run_benchmarks(args),
    }
}
