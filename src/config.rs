use serde::Deserialize;

/// Conventional suffix marking a generated artifact as test source.
pub const TEST_FILE_SUFFIX: &str = ".test.rs";

/// Default file name the shell offers for a generated artifact.
pub const DEFAULT_DOWNLOAD_FILE_NAME: &str = "hooktape-capture.test.rs";

/// Capture configuration, fixed at store construction.
///
/// The recording gate's initial value travels through this struct rather than
/// ambient global state; toggling after construction goes through
/// [`CaptureStore::toggle_recording`](crate::store::CaptureStore::toggle_recording)
/// only.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CaptureConfig {
    /// Whether the recording gate starts open.
    pub recording: bool,
    /// Name of the generated test suite.
    pub suite_name: String,
    /// File name the shell should offer for the generated artifact.
    pub download_file_name: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            recording: true,
            suite_name: "captured hook states".to_string(),
            download_file_name: DEFAULT_DOWNLOAD_FILE_NAME.to_string(),
        }
    }
}
