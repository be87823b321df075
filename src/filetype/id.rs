use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Identifiers for every file type the classifier can report.
///
/// The numeric values are stable and match the order in which the types were introduced.
///
/// ## Categories
///
/// ### Fallbacks
/// Exactly one of **`Empty`**, **`Binary`** or **`Text`** ends every classification result.
///
/// ### Structural detections
/// - **`Dos`**, **`Pe`**: `MZ` executables and the PE header behind the DOS stub
/// - **`OpenOfficeXml`**: ZIP containers with an Office Open XML package layout
///
/// ### Magic byte signatures
/// All other variants are matched against the leading bytes of the sample.
///
/// **`None`** is never produced by the classifier; it marks "no type" for callers.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    EnumIter,
    EnumCount,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum FileTypeId {
    /// No file type
    #[default]
    None = 0,

    /// Zero-length input
    Empty = 1,
    /// Contains a zero byte or a byte `>= 0x80`
    Binary = 2,
    /// Only 7-bit, non-zero bytes
    Text = 3,

    /// MS-DOS `MZ` executable
    Dos = 4,
    /// Portable Executable
    Pe = 5,
    /// Executable and Linkable Format
    Elf = 6,
    /// libpcap packet capture
    Pcap = 7,
    /// SQLite 3 database
    SqliteDatabase = 8,
    /// Windows icon
    Ico = 9,
    /// JPEG image
    Jpg = 10,
    /// GIF image
    Gif = 11,
    /// bzip2 stream
    Bzip2 = 12,
    /// ZIP archive
    Zip = 13,
    /// RAR archive
    Rar = 14,
    /// PNG image
    Png = 15,
    /// Java class file
    JavaClass = 16,
    /// Shockwave Flash
    Swf = 17,
    /// Mach-O binary, thin or fat
    Macho = 18,
    /// Ogg container
    Ogg = 19,
    /// PDF document
    Pdf = 20,
    /// PostScript document
    PostScript = 21,
    /// Adobe Photoshop document
    PhotoShop = 22,
    /// RIFF WAVE audio
    Wav = 23,
    /// Apple disk image
    Dmg = 24,
    /// RIFF AVI video
    Avi = 25,
    /// MP3 audio frame
    Mp3 = 26,
    /// ISO 9660 image
    Iso = 27,
    /// OLE compound document (legacy Office)
    Office = 28,
    /// Android Dalvik executable
    Dalvik = 29,
    /// Chrome extension package
    ChromeExtension = 30,
    /// POSIX tar archive
    Tar = 31,
    /// 7-Zip archive
    SevenZip = 32,
    /// gzip stream
    Gzip = 33,
    /// zlib stream
    Zlib = 34,
    /// Windows cabinet archive
    Cab = 35,
    /// WebAssembly module
    Wasm = 36,
    /// Rich Text Format document
    Rtf = 37,
    /// TIFF image
    Tiff = 38,
    /// Office Open XML package (docx, pptx, xlsx)
    OpenOfficeXml = 39,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn discriminants_are_dense() {
        for (index, id) in FileTypeId::iter().enumerate() {
            assert_eq!(id as usize, index);
        }
        assert_eq!(FileTypeId::COUNT, 40);
        assert_eq!(FileTypeId::Pe as u32, 5);
        assert_eq!(FileTypeId::OpenOfficeXml as u32, 39);
    }

    #[test]
    fn names() {
        assert_eq!(FileTypeId::SevenZip.to_string(), "SevenZip");
        let name: &'static str = FileTypeId::OpenOfficeXml.into();
        assert_eq!(name, "OpenOfficeXml");
    }
}
