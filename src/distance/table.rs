//! Per character pair replacement costs.

use std::{collections::HashMap, fs, io, path::Path};

use crate::{
    Error::{DuplicateEntry, InvalidPair},
    Result,
};

/// Replacement costs that override the default cost for specific `(source, replacement)` pairs.
///
/// Pairs are directional: a cost for `('a', 'b')` does not apply to `('b', 'a')`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplacementTable {
    costs: HashMap<(char, char), f64>,
}

impl ReplacementTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the cost of replacing `source` with `replacement`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPair`] if both characters are equal and
    /// [`crate::Error::DuplicateEntry`] if the pair already has a cost. An existing cost is
    /// never overwritten.
    pub fn insert(&mut self, source: char, replacement: char, cost: f64) -> Result<()> {
        if source == replacement {
            return Err(InvalidPair(source, replacement));
        }

        if self.costs.contains_key(&(source, replacement)) {
            return Err(DuplicateEntry(source, replacement));
        }

        self.costs.insert((source, replacement), cost);
        Ok(())
    }

    /// Returns the registered cost for the pair, if any.
    #[must_use]
    pub fn get(&self, source: char, replacement: char) -> Option<f64> {
        self.costs.get(&(source, replacement)).copied()
    }

    /// Number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns `true` if no pair is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Reads a table from CSV rows of the form `source,replacement,cost`.
    ///
    /// There is no header row. Every row must have exactly three fields, `source` and
    /// `replacement` must be a single character each and `cost` a floating point number.
    /// Rows are registered through [`ReplacementTable::insert`], so self pairs and duplicates
    /// are rejected as well.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Csv`] for unreadable CSV, [`crate::Error::Malformed`] for rows
    /// with the wrong shape (with the 1-based row number), or the errors of
    /// [`ReplacementTable::insert`].
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut table = ReplacementTable::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let row = index + 1;

            if record.len() != 3 {
                return Err(malformed_error!(
                    "Expected 3 fields in row {}, found {}",
                    row,
                    record.len()
                ));
            }

            let cost: f64 = record[2].parse().map_err(|_| {
                malformed_error!("Invalid cost '{}' in row {}", &record[2], row)
            })?;

            let (Some(source), Some(replacement)) =
                (single_char(&record[0]), single_char(&record[1]))
            else {
                return Err(malformed_error!(
                    "Value does not contain single characters in row {}: {}/{}",
                    row,
                    &record[0],
                    &record[1]
                ));
            };

            table.insert(source, replacement, cost)?;
        }

        Ok(table)
    }

    /// Reads a CSV table from the file at `path`, see [`ReplacementTable::from_reader`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::FileError`] if the file can not be opened, otherwise the
    /// errors of [`ReplacementTable::from_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(io::BufReader::new(file))
    }
}

impl FromIterator<((char, char), f64)> for ReplacementTable {
    /// Copies the entries verbatim; later entries for the same pair win.
    fn from_iter<I: IntoIterator<Item = ((char, char), f64)>>(iter: I) -> Self {
        ReplacementTable {
            costs: iter.into_iter().collect(),
        }
    }
}

fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
