use crate::demo::{
    run_chat, run_compare, run_demo, run_profile, ChatArgs, CompareArgs, DemoArgs, ProfileArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use redflag_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "RedFlag AI",
    about = "Score dating profiles and chat logs from the command line or over HTTP",
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
    /// Analyze a single profile
    Profile(ProfileArgs),
    /// Compare two profiles
    Compare(CompareArgs),
    /// Analyze a chat log stored as JSON
    Chat(ChatArgs),
    /// Run every bundled example profile through the analyzer
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

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(server::run(args))
        }
        Command::Profile(args) => run_profile(args),
        Command::Compare(args) => run_compare(args),
        Command::Chat(args) => run_chat(args),
        Command::Demo(args) => run_demo(args),
    }
}
