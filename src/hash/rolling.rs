//! The 7-byte rolling hash that decides where fuzzy hash blocks end.

/// Number of trailing bytes that influence the rolling hash.
pub const ROLLING_WINDOW: usize = 7;

/// Left shift applied to the XOR component for every byte.
const H3_SHIFT: u32 = 5;

/// Rolling hash over the last [`ROLLING_WINDOW`] bytes of a stream.
///
/// Each call to [`RollingHash::update`] returns a trigger value that only depends on the
/// last seven bytes seen. The fuzzy hash engine cuts a block whenever
/// `trigger % block_size == block_size - 1`, so block boundaries follow the content rather
/// than fixed offsets and an insertion only disturbs the blocks around it.
///
/// The state is strictly sequential: every step depends on the previous window contents.
/// Use one instance per pass over a buffer and never share it.
///
/// # Examples
///
/// ```rust
/// use bintriage::hash::RollingHash;
///
/// let mut a = RollingHash::default();
/// let mut b = RollingHash::default();
///
/// // Different prefixes, same 7-byte suffix: the triggers converge.
/// for byte in b"prefix one|abcdef" { a.update(*byte); }
/// for byte in b"2nd|abcdef" { b.update(*byte); }
/// assert_eq!(a.update(b'g'), b.update(b'g'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollingHash {
    /// Last bytes seen, written at `position % ROLLING_WINDOW`
    window: [u8; ROLLING_WINDOW],
    /// Number of bytes processed (wrapping)
    position: u32,
    /// Sum of the bytes in the window
    h1: u32,
    /// Sum of the bytes in the window, weighted by recency (newest weighs `ROLLING_WINDOW`)
    h2: u32,
    /// Shift/XOR hash; bytes older than the window are shifted out
    h3: u32,
}

impl RollingHash {
    /// Creates a zeroed rolling hash.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one byte and returns the new trigger value.
    #[allow(clippy::cast_possible_truncation)]
    pub fn update(&mut self, byte: u8) -> u32 {
        let value = u32::from(byte);
        let slot = (self.position % ROLLING_WINDOW as u32) as usize;

        self.h2 = self
            .h2
            .wrapping_sub(self.h1)
            .wrapping_add(ROLLING_WINDOW as u32 * value);

        self.h1 = self
            .h1
            .wrapping_add(value)
            .wrapping_sub(u32::from(self.window[slot]));

        self.window[slot] = byte;
        self.position = self.position.wrapping_add(1);

        self.h3 = (self.h3 << H3_SHIFT) ^ value;

        self.value()
    }

    /// Returns the current trigger value without consuming input.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.h1.wrapping_add(self.h2).wrapping_add(self.h3)
    }
}
