mod cmd_convert;
mod cmd_inspect;
mod io;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fuzzreplay",
    version,
    about = "Turn fuzzer counterexample transcripts into replay tests"
)]
struct Cli {
    /// Log debug details (dropped lines, skipped calls) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a replay test function from a transcript
    Convert {
        /// Transcript file (omit or `-` for stdin)
        input: Option<PathBuf>,
        /// Write the function to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Options file (defaults to ./fuzzreplay.yaml when present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Name of the generated function
        #[arg(long = "function")]
        function_name: Option<String>,
        /// Skip calls whose invocation contains NAME (repeatable)
        #[arg(long = "exclude", value_name = "NAME")]
        excludes: Vec<String>,
        /// Drop the built-in exclusion list before applying --exclude
        #[arg(long)]
        no_default_excludes: bool,
        /// Which record keeps its call unwrapped
        #[arg(long, value_enum)]
        final_call: Option<cmd_convert::FinalCallArg>,
        /// Emit vm.prank(origin) before each call that has an origin
        #[arg(long)]
        prank: bool,
    },
    /// Show how each transcript line was classified
    Inspect {
        /// Transcript file (omit or `-` for stdin)
        input: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("FUZZREPLAY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let cwd = std::env::current_dir()?;

    match cli.cmd {
        Command::Convert {
            input,
            output,
            config,
            function_name,
            excludes,
            no_default_excludes,
            final_call,
            prank,
        } => cmd_convert::execute(cmd_convert::ConvertParams {
            cwd: &cwd,
            input: input.as_deref(),
            output: output.as_deref(),
            config: config.as_deref(),
            function_name,
            excludes,
            no_default_excludes,
            final_call,
            prank,
        }),
        Command::Inspect { input, json } => cmd_inspect::execute(input.as_deref(), json),
    }
}
