use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible error conditions that can occur while decoding raw buffers,
/// parsing fuzzy hashes, configuring the edit distance scorer and running the analyzer
/// pipeline. Each variant provides specific context about the failure mode to enable
/// appropriate error handling.
///
/// # Error Categories
///
/// ## Buffer Errors
/// - [`Error::OutOfBounds`] - Attempted to read beyond the buffer boundaries
/// - [`Error::Malformed`] - A literal table, signature or table row could not be parsed
///
/// ## Fuzzy Hash Errors
/// - [`Error::InvalidFormat`] - The text form of a fuzzy hash is not `<bs>:<h1>:<h2>`
///
/// ## Edit Distance Errors
/// - [`Error::InvalidPair`] - A replacement cost was registered for a character with itself
/// - [`Error::DuplicateEntry`] - A replacement cost pair was registered twice
///
/// ## I/O and External Errors
/// - [`Error::FileError`] - Filesystem I/O errors
/// - [`Error::Csv`] - Replacement table CSV errors
///
/// ## Pipeline Errors
/// - [`Error::Analyzer`] - The first error reported by an analyzer that accepted its input
///
/// # Examples
///
/// ```rust
/// use bintriage::{Error, FuzzyHash};
///
/// match "not a hash".parse::<FuzzyHash>() {
///     Ok(hash) => println!("block size {}", hash.block_size()),
///     Err(Error::InvalidFormat(reason)) => eprintln!("bad fuzzy hash: {reason}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An out of bound access was attempted while decoding the buffer.
    ///
    /// This error occurs when trying to read data beyond the end of the buffer.
    /// It's a safety check to prevent buffer overruns while decoding untrusted input.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// A built-in literal, a signature or an external table row could not be parsed.
    ///
    /// The error includes the source location where the malformation was detected
    /// for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The text form of a fuzzy hash could not be parsed.
    ///
    /// Raised when the text does not split into exactly three colon-separated
    /// fields, or when the block size is not numeric or below the minimum block size.
    #[error("Invalid fuzzy hash - {0}")]
    InvalidFormat(String),

    /// A replacement cost was registered for a character with itself.
    ///
    /// Replacing a character with itself always costs nothing and can not be overridden.
    #[error("Character and replacement must be different - '{0}'/'{1}'")]
    InvalidPair(char, char),

    /// A replacement cost pair has already been registered.
    ///
    /// The replacement table never silently overwrites an existing entry.
    #[error("Replacement pair already exists - '{0}'/'{1}'")]
    DuplicateEntry(char, char),

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur during file operations
    /// such as reading from disk, permission issues, or filesystem errors.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Error from the csv crate while reading a replacement cost table.
    #[error("{0}")]
    Csv(#[from] csv::Error),

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories or for
    /// wrapping external library errors with additional context.
    #[error("{0}")]
    Error(String),

    /// An analyzer that accepted its input reported an error.
    ///
    /// The pipeline surfaces only the first such error in declared analyzer order.
    /// The analyzer itself keeps its original error and output.
    #[error("Analyzer '{analyzer}' failed - {message}")]
    Analyzer {
        /// Name of the failing analyzer
        analyzer: &'static str,
        /// Rendered message of the analyzer's own error
        message: String,
    },
}
