use crate::store::action::ProducerId;

/// One rendered test case for one captured producer: the import reference
/// naming the producer's hook, and the assertion body derived from its
/// recorded transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub producer: ProducerId,
    pub import_reference: String,
    pub body: String,
}

/// The ordered sequence of test cases making up one generated suite.
#[derive(Debug, Clone, PartialEq)]
pub struct TestArtifact {
    pub suite_name: String,
    pub cases: Vec<TestCase>,
}

impl TestArtifact {
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }
}

/// A generated test file, staged for download.
///
/// Immutable once built; the shell discards it after hand-off.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTestFile {
    pub file_name: String,
    pub contents: String,
}
