mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })
    .expect("failed to set Ctrl+C handler");

    let cli = Cli::parse();

    // Show bintriage info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("bintriage", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Triage {
            path,
            recursive,
            offline,
            parallel,
        } => commands::triage::run(
            path,
            &commands::triage::TriageOptions {
                recursive: *recursive,
                offline: *offline,
                parallel: *parallel,
            },
            &cli.global,
        ),
        Command::Hash { paths } => commands::hash::run(paths, &cli.global),
        Command::Compare { left, right } => commands::compare::run(left, right, &cli.global),
        Command::Filetype { path, recursive } => {
            commands::filetype::run(path, *recursive, &cli.global)
        }
        Command::Distance {
            source,
            target,
            insert,
            delete,
            transpose,
            replace,
            table,
            ignore_case,
        } => commands::distance::run(
            source,
            target,
            &commands::distance::DistanceOptions {
                insert: *insert,
                delete: *delete,
                transpose: *transpose,
                replace: *replace,
                table: table.as_deref(),
                ignore_case: *ignore_case,
            },
            &cli.global,
        ),
    }
}
