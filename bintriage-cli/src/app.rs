use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// bintriage - first look at unknown binaries: fuzzy hashes, file types, entropy
#[derive(Debug, Parser)]
#[command(name = "bintriage", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run every analyzer and print the triage report.
    Triage {
        /// Path to the file (or directory with --recursive).
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Recursively triage every file below a directory.
        #[arg(long)]
        recursive: bool,

        /// Skip the cryptographic digests and the timestamp.
        #[arg(long)]
        offline: bool,

        /// Run the analyzers concurrently.
        #[arg(long)]
        parallel: bool,
    },

    /// Print the fuzzy hash of one or more files.
    Hash {
        /// Files to hash.
        #[arg(value_name = "FILE", required = true)]
        paths: Vec<PathBuf>,
    },

    /// Score the similarity of two files or fuzzy hashes.
    Compare {
        /// First file, or a fuzzy hash in `<bs>:<h1>:<h2>` form.
        #[arg(value_name = "FILE|HASH")]
        left: String,

        /// Second file, or a fuzzy hash in `<bs>:<h1>:<h2>` form.
        #[arg(value_name = "FILE|HASH")]
        right: String,
    },

    /// Classify a file by its magic bytes and structure.
    Filetype {
        /// Path to the file (or directory with --recursive).
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Recursively classify every file below a directory.
        #[arg(long)]
        recursive: bool,
    },

    /// Compute the weighted edit distance between two strings.
    Distance {
        /// Source string.
        source: String,

        /// Target string.
        target: String,

        /// Cost of inserting a character.
        #[arg(long, default_value_t = 1.0)]
        insert: f64,

        /// Cost of deleting a character.
        #[arg(long, default_value_t = 1.0)]
        delete: f64,

        /// Cost of swapping two adjacent characters.
        #[arg(long, default_value_t = 1.0)]
        transpose: f64,

        /// Cost of replacing a character without a table entry.
        #[arg(long, default_value_t = 3.0)]
        replace: f64,

        /// CSV file of `char,char,cost` replacement cost overrides.
        #[arg(long, value_name = "CSV")]
        table: Option<PathBuf>,

        /// Compare case-insensitively.
        #[arg(long)]
        ignore_case: bool,
    },
}
