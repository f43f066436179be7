mod commands;
mod opts;
mod output;
mod util;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::resolve::ResolveArgs;
use opts::GlobalOpts;

#[derive(Parser, Debug)]
#[command(name = "deeplink", version, about = "Deep-link URI scheme resolver")]
struct Cli {
    #[command(flatten)]
    opts: GlobalOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the URI scheme the app should link with
    Resolve(ResolveArgs),

    /// List scheme candidates declared in the manifest
    Schemes,

    /// Report whether the app has a custom scheme and a manifest
    Check,
}

fn main() -> Result<()> {
    let cwd = std::env::current_dir()?;
    util::load_dotenv(&cwd)?;

    let cli = Cli::parse();
    util::setup_logging(cli.opts.quiet);
    let opts = &cli.opts;

    match cli.command {
        Command::Resolve(args) => commands::resolve::cmd_resolve(opts, &args),
        Command::Schemes => commands::schemes::cmd_schemes(opts),
        Command::Check => commands::check::cmd_check(opts),
    }
}
