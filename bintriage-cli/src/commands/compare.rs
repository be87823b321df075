use std::path::Path;

use anyhow::Context;
use bintriage::{fuzzy_hash, similarity, FuzzyHash};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_sample,
    output::{print_field, print_output},
};

#[derive(Debug, Serialize)]
struct ComparisonInfo {
    left: FuzzyHash,
    right: FuzzyHash,
    similarity: f64,
}

pub fn run(left: &str, right: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let left = resolve(left)?;
    let right = resolve(right)?;

    let info = ComparisonInfo {
        similarity: similarity(&left, &right),
        left,
        right,
    };

    print_output(&info, opts, |info| {
        print_field("Left", &info.left);
        print_field("Right", &info.right);
        print_field("Similarity", format!("{:.4}", info.similarity));
    })
}

/// Existing files are hashed, anything else must be a fuzzy hash.
fn resolve(argument: &str) -> anyhow::Result<FuzzyHash> {
    let path = Path::new(argument);
    if path.is_file() {
        let sample = load_sample(path)?;
        return Ok(fuzzy_hash(sample.data()));
    }

    argument
        .parse()
        .with_context(|| format!("'{argument}' is neither a file nor a fuzzy hash"))
}
