use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    ReplayArgs, ResolveArgs, SceneArgs, run_candidates, run_defaults, run_replay, run_resolve,
};
use crate::error::Result;
use crate::logging::LogFormat;
use crate::scene::load_tuning;

#[derive(Debug, Parser)]
#[command(
    name = "magsnap",
    about = "Inspect magnetic snapping and alignment guides for slide scenes",
    version
)]
pub struct Cli {
    /// Tuning JSON; omitted fields keep their defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Diagnostic log format on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every snap candidate for the scene.
    Candidates(SceneArgs),

    /// Resolve one raw origin and print guides, badges and zones.
    Resolve(ResolveArgs),

    /// Replay a pointer trace through a drag session.
    Replay(ReplayArgs),

    /// Print the default tuning as JSON.
    Defaults,
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    if let Commands::Defaults = cli.command {
        return run_defaults(out);
    }
    let tuning = load_tuning(cli.config.as_deref())?;
    match &cli.command {
        Commands::Candidates(args) => run_candidates(args, &tuning, out),
        Commands::Resolve(args) => run_resolve(args, &tuning, out),
        Commands::Replay(args) => run_replay(args, &tuning, out),
        Commands::Defaults => run_defaults(out),
    }
}
