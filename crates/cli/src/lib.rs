use anyhow::{anyhow, Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io;
use tde4_loader::{generate_actions, ImportAction, UiArea};
use tde4_sequence::{ResolverConfig, SequenceRange, SequenceResolver};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "tde4-seq")]
#[command(about = "Image sequence tools for the 3DEqualizer4 pipeline integration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve sequence paths (`plate.%04d.exr`) into hashed path and frame range
    Resolve(ResolveArgs),

    /// List the loader actions offered for a publish
    Actions(ActionsArgs),
}

#[derive(Args)]
struct ResolveArgs {
    /// Sequence or still paths to resolve
    #[arg(required = true)]
    paths: Vec<String>,

    /// Emit one JSON object per path (implies --quiet)
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Skip files that carry no frame number instead of failing (overrides TDE4_SEQUENCE_LENIENT)
    #[arg(long)]
    lenient: bool,
}

#[derive(Args)]
struct ActionsArgs {
    /// Configured action names (defaults to every action the loader supports)
    actions: Vec<String>,

    /// UI area the publish is shown in: main|details|history
    #[arg(long, default_value = "main")]
    ui_area: UiArea,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum ResolveOutput<'a> {
    Ok {
        path: &'a str,
        result: SequenceRange,
    },
    Error {
        path: &'a str,
        code: &'static str,
        message: String,
    },
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::Resolve(args) => args.json,
        Commands::Actions(_) => true,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Resolve(args) => run_resolve(args),
        Commands::Actions(args) => run_actions(args),
    }
}

fn resolver_config(lenient: bool) -> ResolverConfig {
    if lenient {
        ResolverConfig::lenient()
    } else {
        ResolverConfig::from_env()
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.context("Failed to serialize output")
}

fn run_resolve(args: ResolveArgs) -> Result<()> {
    let resolver = SequenceResolver::with_config(resolver_config(args.lenient));
    log::debug!("Resolver config: {:?}", resolver.config());

    let mut failed = 0usize;
    for path in &args.paths {
        let outcome = resolver.resolve(path);
        if args.json {
            let output = match outcome {
                Ok(result) => ResolveOutput::Ok { path, result },
                Err(err) => {
                    failed += 1;
                    ResolveOutput::Error {
                        path,
                        code: err.code(),
                        message: err.to_string(),
                    }
                }
            };
            print_stdout(&to_json(&output, args.pretty)?)?;
            continue;
        }

        match outcome {
            Ok(range) => print_stdout(&range.to_string())?,
            Err(err) => {
                failed += 1;
                log::error!("{path}: {err}");
            }
        }
    }

    if failed > 0 {
        return Err(anyhow!(
            "{failed} of {} paths failed to resolve",
            args.paths.len()
        ));
    }
    Ok(())
}

fn run_actions(args: ActionsArgs) -> Result<()> {
    let names: Vec<String> = if args.actions.is_empty() {
        ImportAction::ALL
            .iter()
            .map(|action| action.name().to_string())
            .collect()
    } else {
        args.actions
    };

    let instances = generate_actions(names.as_slice(), args.ui_area);
    print_stdout(&to_json(&instances, args.pretty)?)
}
