//! Weighted Damerau-Levenshtein edit distance.
//!
//! [`DistanceConfig`] holds the cost of every edit operation plus an optional
//! [`ReplacementTable`] of per character pair overrides, and computes the minimum total cost of
//! turning one string into another. It backs fuzzy hash similarity scoring, where it is used
//! with the [`DistanceConfig::fuzzy_hash`] preset, but works on arbitrary Unicode text.
//!
//! # Examples
//!
//! ```rust
//! use bintriage::distance::DistanceConfig;
//!
//! let mut config = DistanceConfig::new(1.0, 1.0, 1.0, 3.0, true);
//! assert_eq!(config.distance("ABC", "ABD"), 2.0);
//!
//! // A cheap, visually similar replacement
//! config.set_replacement_cost('C', 'D', 0.5)?;
//! assert_eq!(config.distance("ABC", "ABD"), 0.5);
//! # Ok::<(), bintriage::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! Computing a distance only needs `&self`, so a configured [`DistanceConfig`] can be shared
//! between threads. Changing the replacement table requires `&mut self`.

mod table;

pub use table::ReplacementTable;

use std::{io, path::Path};

use crate::Result;

/// One cell of the dynamic programming matrix.
#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    cost: f64,
    /// The cell was reached through a transposition
    transposed: bool,
}

/// Row-major `(rows x cols)` matrix stored in a single allocation.
struct Matrix {
    cells: Vec<Cell>,
    cols: usize,
}

impl Matrix {
    fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            cells: vec![Cell::default(); rows * cols],
            cols,
        }
    }

    fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }
}

/// Costs of the edit operations and the replacement cost overrides.
///
/// Costs are plain `f64` values and are not validated; negative costs produce meaningless
/// distances.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceConfig {
    /// Cost of inserting one character
    pub insert: f64,
    /// Cost of deleting one character
    pub delete: f64,
    /// Cost of swapping two adjacent characters
    pub transpose: f64,
    /// Cost of replacing a character when the pair has no override
    pub replace_default: f64,
    /// Compare characters as they are; otherwise both inputs are lowercased first
    pub case_sensitive: bool,
    replacements: ReplacementTable,
}

impl DistanceConfig {
    /// Creates a scorer with an empty replacement table.
    #[must_use]
    pub fn new(
        insert: f64,
        delete: f64,
        transpose: f64,
        replace_default: f64,
        case_sensitive: bool,
    ) -> Self {
        DistanceConfig {
            insert,
            delete,
            transpose,
            replace_default,
            case_sensitive,
            replacements: ReplacementTable::new(),
        }
    }

    /// Costs used for fuzzy hash comparison: insert 1, delete 1, transpose 5, replace 3,
    /// case sensitive.
    #[must_use]
    pub fn fuzzy_hash() -> Self {
        Self::new(1.0, 1.0, 5.0, 3.0, true)
    }

    /// Registers an override for replacing `source` with `replacement`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPair`] if both characters are equal and
    /// [`crate::Error::DuplicateEntry`] if the pair already has a cost.
    pub fn set_replacement_cost(&mut self, source: char, replacement: char, cost: f64) -> Result<()> {
        self.replacements.insert(source, replacement, cost)
    }

    /// Cost of replacing `source` with `replacement`.
    ///
    /// Zero for equal characters, the registered override if there is one, otherwise
    /// [`DistanceConfig::replace_default`].
    #[must_use]
    pub fn replacement_cost(&self, source: char, replacement: char) -> f64 {
        if source == replacement {
            return 0.0;
        }

        self.replacements
            .get(source, replacement)
            .unwrap_or(self.replace_default)
    }

    /// The current replacement overrides.
    #[must_use]
    pub fn replacement_table(&self) -> &ReplacementTable {
        &self.replacements
    }

    /// Replaces the override table with the CSV rows read from `reader`.
    ///
    /// On error the previous table is kept.
    ///
    /// # Errors
    ///
    /// See [`ReplacementTable::from_reader`].
    pub fn load_replacement_table<R: io::Read>(&mut self, reader: R) -> Result<()> {
        self.replacements = ReplacementTable::from_reader(reader)?;
        log::debug!("loaded {} replacement costs", self.replacements.len());
        Ok(())
    }

    /// Replaces the override table with the CSV file at `path`.
    ///
    /// # Errors
    ///
    /// See [`ReplacementTable::from_path`].
    pub fn load_replacement_table_from_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.replacements = ReplacementTable::from_path(path)?;
        log::debug!(
            "loaded {} replacement costs from {}",
            self.replacements.len(),
            path.display()
        );
        Ok(())
    }

    /// Replaces the override table with `entries`, copied verbatim.
    pub fn load_replacement_table_from_map<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = ((char, char), f64)>,
    {
        self.replacements = entries.into_iter().collect();
    }

    /// Minimum total cost of editing `a` into `b`.
    ///
    /// Supported operations are insertion, deletion, replacement and the transposition of two
    /// adjacent characters. A transposition never builds on a cell that was itself reached by a
    /// transposition. Strings are compared as sequences of `char`s.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        let (s1, s2): (Vec<char>, Vec<char>) = if self.case_sensitive {
            (a.chars().collect(), b.chars().collect())
        } else {
            (a.to_lowercase().chars().collect(), b.to_lowercase().chars().collect())
        };

        if s1.is_empty() {
            return s2.len() as f64 * self.insert;
        }
        if s2.is_empty() {
            return s1.len() as f64 * self.delete;
        }

        let rows = s1.len() + 1;
        let cols = s2.len() + 1;
        let mut matrix = Matrix::new(rows, cols);

        for i in 0..rows {
            matrix.set(i, 0, Cell { cost: i as f64 * self.insert, transposed: false });
        }
        for j in 0..cols {
            matrix.set(0, j, Cell { cost: j as f64 * self.delete, transposed: false });
        }

        for i in 1..rows {
            for j in 1..cols {
                let mut cost = (matrix.get(i - 1, j).cost + self.insert)
                    .min(matrix.get(i, j - 1).cost + self.delete)
                    .min(matrix.get(i - 1, j - 1).cost + self.replacement_cost(s1[i - 1], s2[j - 1]));

                let mut transposed = false;
                if i >= 2
                    && j >= 2
                    && s1[i - 2] == s2[j - 1]
                    && s1[i - 1] == s2[j - 2]
                    && !matrix.get(i - 1, j - 1).transposed
                {
                    let swap = matrix.get(i - 2, j - 2).cost + self.transpose;
                    if swap < cost {
                        cost = swap;
                        transposed = true;
                    }
                }

                matrix.set(i, j, Cell { cost, transposed });
            }
        }

        matrix.get(rows - 1, cols - 1).cost
    }
}

impl Default for DistanceConfig {
    /// Classic weights: insert 1, delete 1, transpose 1, replace 3, case sensitive.
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 3.0, true)
    }
}
