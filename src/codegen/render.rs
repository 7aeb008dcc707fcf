use crate::codegen::artifact::{GeneratedTestFile, TestArtifact, TestCase};
use crate::codegen::template::TestTemplate;
use crate::config::CaptureConfig;
use crate::store::registry::ProducerCapture;

/// Build the ordered test artifact for a set of captured producers.
///
/// Input order is preserved; the store exports captures ordered by id, which
/// keeps rendering reproducible. Ordering carries no correctness meaning.
pub fn build_artifact(
    template: &dyn TestTemplate,
    suite_name: &str,
    captures: &[ProducerCapture],
) -> TestArtifact {
    let cases = captures
        .iter()
        .map(|capture| TestCase {
            producer: capture.id.clone(),
            import_reference: template.import_reference(&capture.id),
            body: template.test_case(capture),
        })
        .collect();
    TestArtifact {
        suite_name: suite_name.to_string(),
        cases,
    }
}

/// Render one self-contained test document for the captured producers.
///
/// Performs no I/O; returns the staged file for the shell to deliver. Zero
/// captures still yields a syntactically valid, empty suite.
pub fn synthesize(
    config: &CaptureConfig,
    template: &dyn TestTemplate,
    captures: &[ProducerCapture],
) -> GeneratedTestFile {
    let artifact = build_artifact(template, &config.suite_name, captures);

    let mut contents = template.preamble(&artifact.suite_name);
    for case in &artifact.cases {
        contents.push_str(&case.import_reference);
        contents.push_str(&case.body);
    }
    contents.push_str(&template.postamble());

    GeneratedTestFile {
        file_name: config.download_file_name.clone(),
        contents,
    }
}
