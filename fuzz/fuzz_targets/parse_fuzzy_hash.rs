#![no_main]

use bintriage::{similarity, FuzzyHash};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(hash) = text.parse::<FuzzyHash>() else {
        return;
    };

    let reparsed: FuzzyHash = hash.to_string().parse().unwrap();
    assert_eq!(reparsed, hash);

    let score = similarity(&hash, &reparsed);
    assert!((0.0..=1.0).contains(&score));
});
