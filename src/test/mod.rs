//! Shared fixtures for the unit tests.
//!
//! The samples live as hex text under `tests/fixtures/` so the integration tests can use the
//! same bytes.

/// 1024 byte PE image: DOS stub, `PE\0\0` header at 0x80, mostly zero padding.
const PE_SAMPLE_HEX: &str = include_str!("../../tests/fixtures/pe_sample.hex");

/// ZIP container holding `[Content_Types].xml` and `docProps/core.xml`.
const OFFICE_OPEN_XML_HEX: &str = include_str!("../../tests/fixtures/office_open_xml.hex");

/// Fuzzy hash of [`pe_sample`].
pub const PE_SAMPLE_FUZZY_HASH: &str =
    "6:MxlEh/jKjXFeyclltA9izeUD0r9llUMIotp0P/3BWwKXGO:OEh/G70yUQ9iKUAhPAnQwu";

/// Shannon entropy of [`pe_sample`].
pub const PE_SAMPLE_ENTROPY: f64 = 1.973113266796047;

/// Decodes hex text, ignoring whitespace.
pub fn decode_hex(text: &str) -> Vec<u8> {
    let digits: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => panic!("invalid hex digit {:?}", char::from(b)),
        })
        .collect();

    assert!(digits.len() % 2 == 0, "odd number of hex digits");
    digits.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect()
}

pub fn pe_sample() -> Vec<u8> {
    decode_hex(PE_SAMPLE_HEX)
}

pub fn office_open_xml_sample() -> Vec<u8> {
    decode_hex(OFFICE_OPEN_XML_HEX)
}

#[test]
fn fixtures_decode() {
    assert_eq!(pe_sample().len(), 1024);
    assert_eq!(&pe_sample()[..2], b"MZ");
    assert_eq!(&office_open_xml_sample()[..4], b"PK\x03\x04");
    assert_eq!(decode_hex("4d 5A\n00"), vec![0x4D, 0x5A, 0x00]);
}
