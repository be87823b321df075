#![no_main]

use bintriage::{triage_with_config, TriageConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = triage_with_config(data, &TriageConfig::offline());
});
