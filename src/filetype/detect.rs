//! Structural detectors that look past the leading magic bytes.
//!
//! Each detector returns its findings from least to most specific; the classifier reverses
//! them so the most specific type is reported first.

use super::{FileType, FileTypeId};
use crate::file::io::{read_be, read_le};

/// Detector signature.
pub(crate) type Detector = fn(&[u8]) -> Vec<FileType>;

/// Detectors in the order they run.
pub(crate) const DETECTORS: &[Detector] = &[pe, office_open_xml];

/// `e_lfanew`, the DOS header field holding the PE header offset
const PE_POINTER_OFFSET: usize = 0x3C;

const MZ_MAGIC: u16 = 0x4D5A;
const PE_MAGIC: u32 = 0x5045_0000;
const ZIP_LOCAL_HEADER_MAGIC: u32 = 0x504B_0304;

const OOXML_CONTENT_TYPES: &[u8] = b"[Content_Types].xml";
const OOXML_CORE_PROPERTIES: &[u8] = b"docProps/core.xml";

/// `MZ` executables, and the PE image behind the DOS stub when `e_lfanew` points at `PE\0\0`.
pub(crate) fn pe(data: &[u8]) -> Vec<FileType> {
    let mut result = Vec::new();

    if read_be::<u16>(data, 0).ok() != Some(MZ_MAGIC) {
        return result;
    }
    result.push(FileType::new(FileTypeId::Dos, "DOS Executable", &["exe"]));

    let Ok(pointer) = read_le::<i32>(data, PE_POINTER_OFFSET) else {
        return result;
    };
    let Ok(pointer) = usize::try_from(pointer) else {
        return result;
    };

    if read_be::<u32>(data, pointer).ok() == Some(PE_MAGIC) {
        result.push(FileType::new(FileTypeId::Pe, "PE Executable", &["exe"]));
    }

    result
}

/// ZIP containers that carry the Office Open XML package parts.
///
/// The part names are searched in the raw bytes, which works because ZIP stores file names
/// uncompressed in the local file headers.
pub(crate) fn office_open_xml(data: &[u8]) -> Vec<FileType> {
    if read_be::<u32>(data, 0).ok() != Some(ZIP_LOCAL_HEADER_MAGIC) {
        return Vec::new();
    }

    if contains(data, OOXML_CONTENT_TYPES) && contains(data, OOXML_CORE_PROPERTIES) {
        return vec![FileType::new(
            FileTypeId::OpenOfficeXml,
            "Open Office XML",
            &["docx", "pptx", "xlsx"],
        )];
    }

    Vec::new()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
