//! End to end triage runs over the bundled fixtures.

mod common;

use bintriage::{
    filetype::FileTypeId,
    triage::{
        Analyzer, AnalyzerSet, AnalyzerState, DefaultAnalyzers, Pipeline, TimestampAnalyzer,
        TriageConfig, TriageReport,
    },
    triage, triage_with_config, Error,
};
use chrono::{DateTime, Utc};
use common::{office_open_xml_sample, pe_sample, PE_SAMPLE_ENTROPY};

fn fixed_clock() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn pe_sample_report() {
    let report = triage(&pe_sample()).unwrap();

    assert_eq!(report.md5.as_deref(), Some("DE1C4F31BEAEB0C3DFD961A5F3624881"));
    assert_eq!(
        report.sha1.as_deref(),
        Some("E6CDC2C50DE232BA0A562D63F2D8D3422E17E25A")
    );
    assert_eq!(report.size, Some(1024));
    assert!((report.entropy.unwrap() - PE_SAMPLE_ENTROPY).abs() < 1e-12);
    assert_eq!(report.file_type.map(|t| t.id), Some(FileTypeId::Pe));
    assert_eq!(report.fuzzy_hash_block_size, Some(6));
    assert_eq!(report.fuzzy_hash2.as_deref(), Some("OEh/G70yUQ9iKUAhPAnQwu"));
    assert!(report.time.is_some());
}

#[test]
fn office_document_report() {
    let data = office_open_xml_sample();
    let report = triage_with_config(&data, &TriageConfig::offline().with_parallel(true)).unwrap();

    let types: Vec<FileTypeId> = report.file_types.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(
        types,
        vec![FileTypeId::OpenOfficeXml, FileTypeId::Zip, FileTypeId::Binary]
    );
    assert_eq!(report.size, Some(data.len() as u64));
    assert!(report.md5.is_none());
    assert!(report.time.is_none());
}

#[test]
fn report_json_roundtrip() {
    let mut analyzers = DefaultAnalyzers {
        timestamp: TimestampAnalyzer::with_clock(fixed_clock),
        ..DefaultAnalyzers::default()
    };
    analyzers
        .run(&pe_sample(), &TriageConfig::default())
        .unwrap();
    let report = analyzers.report();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["md5"], "DE1C4F31BEAEB0C3DFD961A5F3624881");
    assert_eq!(json["file_type"]["id"], "Pe");
    assert_eq!(json["file_types"][1]["id"], "Dos");
    assert_eq!(json["byte_histogram"]["0"], 813);
    assert_eq!(json["time"], "2024-05-01T12:00:00Z");

    let mut back: TriageReport = serde_json::from_value(json).unwrap();
    assert!((back.entropy.unwrap() - report.entropy.unwrap()).abs() < 1e-12);
    back.entropy = report.entropy;
    assert_eq!(back, report);
}

/// Accepts inputs starting with `MZ` and fails on short ones.
#[derive(Default)]
struct StubLength {
    state: AnalyzerState,
}

impl Analyzer for StubLength {
    fn name(&self) -> &'static str {
        "stub_length"
    }

    fn run(&mut self, data: &[u8]) {
        self.reset();
        if data.starts_with(b"MZ") {
            self.state.accept();
        }
        if data.len() < 64 {
            self.state
                .fail(Error::Error(format!("stub of {} bytes", data.len())));
        }
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    fn did_accept(&self) -> bool {
        self.state.accepted()
    }

    fn error(&self) -> Option<&Error> {
        self.state.error()
    }
}

#[test]
fn custom_analyzer_alongside_builtins() {
    let mut builtins = DefaultAnalyzers::default();
    let mut stub = StubLength::default();

    // accepted and failing: the run fails, the other outcomes survive
    {
        let mut analyzers = builtins.analyzers_mut(AnalyzerSet::SIZE | AnalyzerSet::FILE_TYPE);
        analyzers.push(&mut stub);

        match Pipeline::run(b"MZ\x00\x00", &mut analyzers) {
            Err(Error::Analyzer { analyzer, message }) => {
                assert_eq!(analyzer, "stub_length");
                assert_eq!(message, "stub of 4 bytes");
            }
            other => panic!("expected analyzer error, got {other:?}"),
        }
    }
    assert_eq!(builtins.report().size, Some(4));

    // failing without accepting is not an error
    {
        let mut analyzers = builtins.analyzers_mut(AnalyzerSet::SIZE);
        analyzers.push(&mut stub);
        assert!(Pipeline::run_parallel(b"ELF", &mut analyzers).is_ok());
    }
    assert!(stub.error().is_some());
    assert!(!stub.did_accept());
}
