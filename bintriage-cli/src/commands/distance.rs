use std::path::Path;

use bintriage::DistanceConfig;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    output::{print_field, print_output},
};

pub struct DistanceOptions<'a> {
    pub insert: f64,
    pub delete: f64,
    pub transpose: f64,
    pub replace: f64,
    pub table: Option<&'a Path>,
    pub ignore_case: bool,
}

#[derive(Debug, Serialize)]
struct DistanceInfo<'a> {
    source: &'a str,
    target: &'a str,
    distance: f64,
    replacements: usize,
}

pub fn run(
    source: &str,
    target: &str,
    options: &DistanceOptions,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let mut config = DistanceConfig::new(
        options.insert,
        options.delete,
        options.transpose,
        options.replace,
        !options.ignore_case,
    );
    if let Some(table) = options.table {
        config.load_replacement_table_from_path(table)?;
    }

    let info = DistanceInfo {
        source,
        target,
        distance: config.distance(source, target),
        replacements: config.replacement_table().len(),
    };

    print_output(&info, opts, |info| {
        print_field("Source", info.source);
        print_field("Target", info.target);
        if info.replacements > 0 {
            print_field("Table entries", info.replacements);
        }
        print_field("Distance", info.distance);
    })
}
