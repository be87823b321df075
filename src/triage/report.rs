use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    filetype::{FileType, FileTypes},
    hash::FuzzyHash,
};

/// Aggregated outcome of a triage run.
///
/// Every field belongs to one analyzer and is `None` when that analyzer was not selected or
/// did not accept the input. `None` fields are left out of the serialized form.
///
/// # Examples
///
/// ```rust
/// use bintriage::triage::{triage_with_config, TriageConfig};
///
/// let report = triage_with_config(b"MZ", &TriageConfig::minimal())?;
/// assert_eq!(report.size, Some(2));
/// assert!(report.md5.is_none());
///
/// let json = serde_json::to_string(&report).unwrap();
/// assert!(json.starts_with(r#"{"size":2,"file_type":{"id":"Dos""#));
/// # Ok::<(), bintriage::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriageReport {
    /// MD5, uppercase hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    /// SHA-1, uppercase hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    /// SHA-256, uppercase hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    /// Input length in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Shannon entropy in bits per byte
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entropy: Option<f64>,
    /// Most specific file type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
    /// All file types, most specific first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_types: Option<FileTypes>,
    /// Count of every byte value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_histogram: Option<BTreeMap<u8, u64>>,
    /// Fuzzy hash in text form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_hash: Option<FuzzyHash>,
    /// First half of the fuzzy hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_hash1: Option<String>,
    /// Second half of the fuzzy hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_hash2: Option<String>,
    /// Block size of the fuzzy hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_hash_block_size: Option<u32>,
    /// When the run happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}
