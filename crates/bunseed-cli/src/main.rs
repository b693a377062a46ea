use std::path::PathBuf;

use atty::Stream;
use bunseed_core::{seed_cache_entry, to_json_response, ExecutionOutcome, SeedRequest};
use clap::{value_parser, ArgAction, Parser};
use color_eyre::{eyre::eyre, Result};
use serde_json::Value;

mod style;

use style::Style;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = BunseedCli::parse();
    init_tracing(cli.trace, cli.verbose);

    let request = SeedRequest {
        out_root: cli.out.clone(),
        specifier: cli.name.clone(),
        package_path: cli.package.clone(),
        patch_file: cli.patch_file.clone(),
        registry: cli.registry.clone(),
        dry_run: cli.dry_run,
    };

    let outcome = seed_cache_entry(&request).map_err(|err| eyre!("{err:?}"))?;
    let code = emit_output(&cli, &outcome)?;

    if code == 0 {
        Ok(())
    } else {
        std::process::exit(code);
    }
}

fn init_tracing(trace: bool, verbose: u8) {
    let level = if trace {
        "trace"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = format!("bunseed_cli={level},bunseed_core={level},bunseed_domain={level}");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn emit_output(cli: &BunseedCli, outcome: &ExecutionOutcome) -> Result<i32> {
    let code = outcome.exit_code();
    let style = Style::new(cli.no_color, atty::is(Stream::Stdout));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&to_json_response(outcome))?);
    } else if !cli.quiet {
        println!("{}", style.status(&outcome.status, &outcome.message));
        if let Some(hint) = hint_from_details(&outcome.details) {
            let hint_line = format!("Hint: {hint}");
            println!("{}", style.info(&hint_line));
        }
    }

    Ok(code)
}

fn hint_from_details(details: &Value) -> Option<&str> {
    details
        .as_object()
        .and_then(|map| map.get("hint"))
        .and_then(Value::as_str)
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Seed bun's install cache from pre-fetched package contents",
    long_about = "Computes the basename bun's global install cache uses for one dependency \
                  and links pre-fetched package contents into place, so a later `bun install` \
                  finds every dependency resident and performs no network access. One \
                  invocation handles exactly one dependency.",
    after_help = "Examples:\n  \
                  bunseed --out node_modules/.cache --name react@18.2.0 --package /build/react\n  \
                  bunseed --out cache --name '@scope/pkg@1.0.0' --package /build/pkg --registry npm.pkg.github.com\n  \
                  bunseed --name 'tarball:https://example.com/a.tgz' --package /build/a --out cache --dry-run --json\n"
)]
struct BunseedCli {
    #[arg(
        long,
        value_parser = value_parser!(PathBuf),
        help = "Cache root the entry is created under"
    )]
    out: PathBuf,
    #[arg(
        long,
        help = "Dependency specifier (npm name@version, tarball:, github:, or git: form)"
    )]
    name: String,
    #[arg(
        long,
        value_parser = value_parser!(PathBuf),
        help = "Absolute path to the pre-fetched package contents; stored verbatim as the link target"
    )]
    package: PathBuf,
    #[arg(
        long,
        value_parser = value_parser!(PathBuf),
        help = "Patch file whose raw bytes mark the entry as patched"
    )]
    patch_file: Option<PathBuf>,
    #[arg(
        long,
        help = "Registry host or URL (the default npm registry never appears in cache keys)"
    )]
    registry: Option<String>,
    #[arg(
        long,
        help = "Report the computed basename without touching the filesystem"
    )]
    dry_run: bool,
    #[arg(
        short,
        long,
        help = "Suppress human output (errors still print to stderr)"
    )]
    quiet: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase logging (-vv reaches trace)")]
    verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v/-q")]
    trace: bool,
    #[arg(long, help = "Emit {status,message,details} JSON envelopes")]
    json: bool,
    #[arg(long, help = "Disable colored human output")]
    no_color: bool,
}
