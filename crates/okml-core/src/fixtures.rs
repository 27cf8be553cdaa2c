//! In-crate test fixtures (the shared ones live in `okml-test-utils`)

use crate::document::EnvironmentDocument;
use crate::model::LegacyEnvironment;

pub(crate) const SAMPLE_YAML: &str = include_str!("../../../sample_data/legacy_env.yaml");

pub(crate) fn sample_document() -> EnvironmentDocument {
    serde_yaml::from_str(SAMPLE_YAML).expect("sample document parses")
}

pub(crate) fn sample_environment() -> LegacyEnvironment {
    LegacyEnvironment::from_document(sample_document()).expect("sample document is valid")
}

pub(crate) fn environment_with(edit: impl FnOnce(&mut EnvironmentDocument)) -> LegacyEnvironment {
    let mut doc = sample_document();
    edit(&mut doc);
    LegacyEnvironment::from_document(doc).expect("edited document is valid")
}
