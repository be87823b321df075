use std::path::Path;

use bintriage::{TriageConfig, TriageReport};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{file_display_name, load_sample, process_directory},
    output::{print_field, print_output, Align, TabWriter},
};

pub struct TriageOptions {
    pub recursive: bool,
    pub offline: bool,
    pub parallel: bool,
}

impl TriageOptions {
    fn config(&self) -> TriageConfig {
        let config = if self.offline {
            TriageConfig::offline()
        } else {
            TriageConfig::comprehensive()
        };
        config.with_parallel(self.parallel)
    }
}

#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    #[serde(flatten)]
    report: TriageReport,
}

#[derive(Debug, Serialize)]
struct BatchReport {
    results: Vec<FileReport>,
    total_files: usize,
    failed: usize,
}

pub fn run(path: &Path, options: &TriageOptions, opts: &GlobalOptions) -> anyhow::Result<()> {
    let config = options.config();

    if options.recursive {
        let (results, failed) = process_directory(path, |file| triage_file(file, &config))?;
        let batch = BatchReport {
            total_files: results.len() + failed,
            failed,
            results,
        };

        print_output(&batch, opts, |batch| {
            let mut tw = TabWriter::new(vec![
                ("File", Align::Left),
                ("Size", Align::Right),
                ("Entropy", Align::Right),
                ("Type", Align::Left),
                ("Fuzzy hash", Align::Left),
            ]);
            for result in &batch.results {
                let report = &result.report;
                tw.row(vec![
                    result.file.clone(),
                    report.size.map_or_else(String::new, |s| s.to_string()),
                    report.entropy.map_or_else(String::new, |e| format!("{e:.4}")),
                    report
                        .file_type
                        .as_ref()
                        .map_or_else(String::new, |t| t.id.to_string()),
                    report
                        .fuzzy_hash
                        .as_ref()
                        .map_or_else(String::new, ToString::to_string),
                ]);
            }
            tw.print();
            println!();
            println!(
                "Triaged {} files, {} failed",
                batch.total_files, batch.failed
            );
        })
    } else {
        let result = triage_file(path, &config)?;
        print_output(&result, opts, display_report)
    }
}

fn triage_file(path: &Path, config: &TriageConfig) -> anyhow::Result<FileReport> {
    let sample = load_sample(path)?;
    let report = bintriage::triage_with_config(sample.data(), config)?;

    Ok(FileReport {
        file: file_display_name(path),
        report,
    })
}

fn display_report(result: &FileReport) {
    let report = &result.report;

    print_field("File", &result.file);
    if let Some(size) = report.size {
        print_field("Size", size);
    }
    if let Some(md5) = &report.md5 {
        print_field("MD5", md5);
    }
    if let Some(sha1) = &report.sha1 {
        print_field("SHA1", sha1);
    }
    if let Some(sha256) = &report.sha256 {
        print_field("SHA256", sha256);
    }
    if let Some(entropy) = report.entropy {
        print_field("Entropy", format!("{entropy:.6}"));
    }
    if let Some(hash) = &report.fuzzy_hash {
        print_field("Fuzzy hash", hash);
    }
    if let Some(time) = &report.time {
        print_field("Time", time.to_rfc3339());
    }

    if let Some(types) = &report.file_types {
        println!("\nFile types:");
        let mut tw = TabWriter::new(vec![
            ("Type", Align::Left),
            ("Description", Align::Left),
            ("Extensions", Align::Left),
        ])
        .indent("  ");
        for file_type in types {
            tw.row(vec![
                file_type.id.to_string(),
                file_type.description.clone(),
                file_type.extensions.join(", "),
            ]);
        }
        tw.print();
    }

    if let Some(histogram) = &report.byte_histogram {
        let mut top: Vec<(u8, u64)> = histogram
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(&byte, &count)| (byte, count))
            .collect();
        top.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        println!("\nMost frequent bytes:");
        let mut tw = TabWriter::new(vec![("Byte", Align::Left), ("Count", Align::Right)])
            .indent("  ");
        for (byte, count) in top.into_iter().take(8) {
            tw.row(vec![format!("0x{byte:02X}"), count.to_string()]);
        }
        tw.print();
    }
}
