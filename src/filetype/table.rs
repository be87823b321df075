//! The ordered registry of magic byte signatures.

use std::sync::OnceLock;

use super::{FileTypeId, SignatureEntry};
use crate::Result;

/// Built-in signatures in match order.
///
/// Order matters: a sample is reported once for every entry that matches, in this order, so
/// e.g. `CA FE BA BE` yields Mach-O before Java class.
const SIGNATURES: &[(&str, FileTypeId)] = &[
    ("7F 45 4C 46 |ELF Executable|", FileTypeId::Elf),
    ("a1 b2 c3 d4, d4 c3 b2 a1|Packet Capture|pcap", FileTypeId::Pcap),
    ("25 50 44 46 2d|PDF Document|pdf", FileTypeId::Pdf),
    (
        "53 51 4c 69 74 65 20 66 6f 72 6d 61 74 20 33 00|SQLite Database|db",
        FileTypeId::SqliteDatabase,
    ),
    ("00 00 01 00|Computer Icon|ico", FileTypeId::Ico),
    ("47 49 46 38 37 61,47 49 46 38 39 61|GIF Image|gif", FileTypeId::Gif),
    ("89 50 4E 47 0D 0A 1A 0A|Portable Network Graphics|png", FileTypeId::Png),
    (
        "CA FE BA BE,FE ED FA CE,FE ED FA CF,CE FA ED FE,CF FA ED FE|Mach-O Binary|",
        FileTypeId::Macho,
    ),
    ("CA FE BA BE|Java Class|class", FileTypeId::JavaClass),
    ("52 49 46 46 ?? ?? ?? ?? 57 41 56 45|Waveform Audio File|wav", FileTypeId::Wav),
    ("52 49 46 46 ?? ?? ?? ?? 41 56 49 20|Audio Video Interleave|avi", FileTypeId::Avi),
    ("FF FB|MP3 File|mp3", FileTypeId::Mp3),
    ("D0 CF 11 E0 A1 B1 1A E1|Office Document|doc,xls,ppt", FileTypeId::Office),
    ("64 65 78 0A 30 33 35 00|Dalvik Executable|dex", FileTypeId::Dalvik),
    ("75 73 74 61 72 00 30 30,75 73 74 61 72 20 20 00|Tar Archive|tar", FileTypeId::Tar),
    ("37 7A BC AF 27 1C|7-Zip|7z", FileTypeId::SevenZip),
    ("1F 8B|Gzip|gz", FileTypeId::Gzip),
    ("43 57 53,46 57 53|Shockwave Flash|swf", FileTypeId::Swf),
    (
        "FF D8 FF DB,FF D8 FF E0 00 10 4A 46 49 46 00 01,FF D8 FF EE,FF D8 FF E1 ?? ?? 45 78 69 66 00 00|JPEG Image|jpg,jpeg",
        FileTypeId::Jpg,
    ),
    ("50 4B 03 04,50 4B 05 06,50 4B 07 08|Zip Archive|zip", FileTypeId::Zip),
    ("52 61 72 21 1A 07 00,52 61 72 21 1A 07 01 00|RAR Archive|rar", FileTypeId::Rar),
    ("43 44 30 30 31|ISO Image|iso", FileTypeId::Iso),
    ("4F 67 67 53|Ogg Vorbis Data|ogg", FileTypeId::Ogg),
    ("4D 53 43 46|Windows Cabinet Archive|cab", FileTypeId::Cab),
    ("00 61 73 6d|WebAssembly|wasm", FileTypeId::Wasm),
    ("42 5A 68|Bzip2 Data|bz2", FileTypeId::Bzip2),
    ("49 49 2A 00,4D 4D 00 2A|Tagged Image File Format|tiff", FileTypeId::Tiff),
    ("25 21 50 53|PostScript Document|ps", FileTypeId::PostScript),
    ("43 72 32 34|Chrome Extension|crx", FileTypeId::ChromeExtension),
    ("78 01 73 0D 62 62 60|Apple Disk Image|dmg", FileTypeId::Dmg),
    ("7B 5C 72 74 66 31|RTF Document|rtf", FileTypeId::Rtf),
    ("38 42 50 53|PhotoShop Document|psd", FileTypeId::PhotoShop),
    ("78 01,78 9C,78 DA|Zlib Data|zlib", FileTypeId::Zlib),
];

static BUILTIN: OnceLock<SignatureTable> = OnceLock::new();

/// Ordered collection of [`SignatureEntry`] values.
///
/// The built-in table is parsed once on first use and shared read-only afterwards. Custom
/// tables can be built with [`SignatureTable::from_entries`] and handed to a
/// [`crate::filetype::Classifier`].
///
/// # Examples
///
/// ```rust
/// use bintriage::filetype::{Classifier, FileTypeId, SignatureTable};
///
/// let table = SignatureTable::from_entries([("4D 5A|MZ Stub|", FileTypeId::Dos)])?;
/// let classifier = Classifier::new(&table);
/// assert!(classifier.get(b"MZ\x90\x00").matches(FileTypeId::Dos));
/// # Ok::<(), bintriage::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureTable {
    entries: Vec<SignatureEntry>,
}

impl SignatureTable {
    /// Returns the built-in table.
    ///
    /// # Panics
    ///
    /// Panics on first use if one of the built-in signature literals is malformed.
    #[must_use]
    pub fn builtin() -> &'static SignatureTable {
        BUILTIN.get_or_init(|| match Self::from_entries(SIGNATURES.iter().copied()) {
            Ok(table) => table,
            Err(error) => panic!("built-in signature table is malformed: {error}"),
        })
    }

    /// Parses a table from `(entry, id)` pairs, keeping their order.
    ///
    /// See [`SignatureEntry::parse`] for the entry format.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Malformed`] for the first entry that fails to parse.
    pub fn from_entries<'a, I>(entries: I) -> Result<SignatureTable>
    where
        I: IntoIterator<Item = (&'a str, FileTypeId)>,
    {
        let entries = entries
            .into_iter()
            .map(|(text, id)| SignatureEntry::parse(text, id))
            .collect::<Result<Vec<_>>>()?;

        Ok(SignatureTable { entries })
    }

    /// The entries in match order.
    #[must_use]
    pub fn entries(&self) -> &[SignatureEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in match order.
    pub fn iter(&self) -> std::slice::Iter<'_, SignatureEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a SignatureTable {
    type Item = &'a SignatureEntry;
    type IntoIter = std::slice::Iter<'a, SignatureEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
