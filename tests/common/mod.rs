//! Fixtures shared by the integration tests.
#![allow(dead_code)]

use std::{
    io::Write,
    path::{Path, PathBuf},
};

const PE_SAMPLE_HEX: &str = include_str!("../fixtures/pe_sample.hex");
const OFFICE_OPEN_XML_HEX: &str = include_str!("../fixtures/office_open_xml.hex");

/// Fuzzy hash of [`pe_sample`].
pub const PE_SAMPLE_FUZZY_HASH: &str =
    "6:MxlEh/jKjXFeyclltA9izeUD0r9llUMIotp0P/3BWwKXGO:OEh/G70yUQ9iKUAhPAnQwu";

/// Shannon entropy of [`pe_sample`].
pub const PE_SAMPLE_ENTROPY: f64 = 1.973113266796047;

fn decode_hex(text: &str) -> Vec<u8> {
    let digits: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| (b as char).to_digit(16).unwrap() as u8)
        .collect();
    digits.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect()
}

/// 1024 byte PE image with a DOS stub.
pub fn pe_sample() -> Vec<u8> {
    decode_hex(PE_SAMPLE_HEX)
}

/// ZIP container holding the Office Open XML marker entries.
pub fn office_open_xml_sample() -> Vec<u8> {
    decode_hex(OFFICE_OPEN_XML_HEX)
}

/// Writes `data` to a file in the temp directory, unique per test process.
pub fn write_temp(name: &str, data: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("bintriage-{}-{name}", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(data).unwrap();
    path
}

pub fn remove_temp(path: &Path) {
    let _ = std::fs::remove_file(path);
}
