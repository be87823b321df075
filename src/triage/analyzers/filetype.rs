//! File type classification of the input.

use crate::{
    filetype::{Classifier, FileType, FileTypes},
    triage::{Analyzer, AnalyzerState},
    Error,
};

/// Classifies the input by magic bytes and structure.
#[derive(Debug)]
pub struct FileTypeAnalyzer {
    state: AnalyzerState,
    classifier: Classifier<'static>,
    file_types: FileTypes,
}

impl FileTypeAnalyzer {
    /// Creates an analyzer using `classifier`.
    #[must_use]
    pub fn new(classifier: Classifier<'static>) -> Self {
        FileTypeAnalyzer {
            state: AnalyzerState::default(),
            classifier,
            file_types: FileTypes::default(),
        }
    }

    /// Most specific type of the last input.
    #[must_use]
    pub fn file_type(&self) -> Option<&FileType> {
        self.file_types.first()
    }

    /// All types of the last input, most specific first.
    #[must_use]
    pub fn file_types(&self) -> &FileTypes {
        &self.file_types
    }
}

impl Default for FileTypeAnalyzer {
    fn default() -> Self {
        Self::new(Classifier::default())
    }
}

impl Analyzer for FileTypeAnalyzer {
    fn name(&self) -> &'static str {
        "file_type"
    }

    fn run(&mut self, data: &[u8]) {
        self.reset();
        self.file_types = self.classifier.get(data);
        self.state.accept();
    }

    fn reset(&mut self) {
        self.state.reset();
        self.file_types = FileTypes::default();
    }

    fn did_accept(&self) -> bool {
        self.state.accepted()
    }

    fn error(&self) -> Option<&Error> {
        self.state.error()
    }
}
