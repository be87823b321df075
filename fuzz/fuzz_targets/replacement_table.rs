#![no_main]

use bintriage::distance::ReplacementTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = ReplacementTable::from_reader(data);
});
