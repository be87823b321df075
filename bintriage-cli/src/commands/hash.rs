use std::path::PathBuf;

use bintriage::fuzzy_hash;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_sample,
    output::print_output,
};

#[derive(Debug, Serialize)]
struct HashInfo {
    file: String,
    fuzzy_hash: String,
}

pub fn run(paths: &[PathBuf], opts: &GlobalOptions) -> anyhow::Result<()> {
    let mut hashes = Vec::with_capacity(paths.len());
    for path in paths {
        let sample = load_sample(path)?;
        hashes.push(HashInfo {
            file: path.display().to_string(),
            fuzzy_hash: fuzzy_hash(sample.data()).to_string(),
        });
    }

    // ssdeep prints `hash,"file"`
    print_output(&hashes, opts, |hashes| {
        for info in hashes {
            println!("{},\"{}\"", info.fuzzy_hash, info.file);
        }
    })
}
