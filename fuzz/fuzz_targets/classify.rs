#![no_main]

use bintriage::{classify, classify1};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let types = classify(data);
    assert!(!types.is_empty());
    assert_eq!(types.first(), Some(&classify1(data)));
});
