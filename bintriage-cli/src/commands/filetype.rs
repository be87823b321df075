use std::path::Path;

use bintriage::{classify, FileTypes};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{file_display_name, load_sample, process_directory},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct ClassificationInfo {
    file: String,
    file_types: FileTypes,
}

pub fn run(path: &Path, recursive: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    if recursive {
        let (results, _failed) = process_directory(path, classify_file)?;

        print_output(&results, opts, |results| {
            let mut tw = TabWriter::new(vec![("File", Align::Left), ("Types", Align::Left)]);
            for info in results {
                tw.row(vec![info.file.clone(), type_list(&info.file_types)]);
            }
            tw.print();
        })
    } else {
        let info = classify_file(path)?;

        print_output(&info, opts, |info| {
            println!("{}: {}", info.file, type_list(&info.file_types));
            let mut tw = TabWriter::new(vec![
                ("Type", Align::Left),
                ("Description", Align::Left),
                ("Extensions", Align::Left),
            ])
            .indent("  ");
            for file_type in &info.file_types {
                tw.row(vec![
                    file_type.id.to_string(),
                    file_type.description.clone(),
                    file_type.extensions.join(", "),
                ]);
            }
            tw.print();
        })
    }
}

fn classify_file(path: &Path) -> anyhow::Result<ClassificationInfo> {
    let sample = load_sample(path)?;

    Ok(ClassificationInfo {
        file: file_display_name(path),
        file_types: classify(sample.data()),
    })
}

fn type_list(types: &FileTypes) -> String {
    types
        .iter()
        .map(|t| t.id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
