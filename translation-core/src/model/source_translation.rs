use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::language::Language;
use super::project::Project;
use super::resource::Resource;
use super::resource_container::ResourceContainer;
use super::translation::{Translation, TranslationIdentity};

/// Integer stand-in for an unset timestamp, for consumers that cannot take `null`.
pub const UNSET_TIMESTAMP: i64 = -1;

/// A translation identity plus the time its source was last modified.
///
/// Timestamps are seconds since the Unix epoch (UTC). They are stored exactly
/// as given: negative values and zero are legitimate.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SourceTranslation {
    #[serde(flatten)]
    translation: Translation,

    #[serde(default)]
    modified_timestamp: Option<i64>,
}

impl SourceTranslation {
    pub fn new(language: Language, project: Project, resource: Resource) -> Self {
        Self {
            translation: Translation::new(language, project, resource),
            modified_timestamp: None,
        }
    }

    pub fn from_container(container: &ResourceContainer) -> Self {
        Self {
            translation: Translation::from(container),
            modified_timestamp: None,
        }
    }

    pub fn from_translation(translation: &impl TranslationIdentity, modified_timestamp: i64) -> Self {
        Self {
            translation: Translation::from_identity(translation),
            modified_timestamp: Some(modified_timestamp),
        }
    }

    pub fn translation(&self) -> &Translation {
        &self.translation
    }

    pub fn modified_timestamp(&self) -> Option<i64> {
        self.modified_timestamp
    }

    pub fn modified_timestamp_or_unset(&self) -> i64 {
        self.modified_timestamp.unwrap_or(UNSET_TIMESTAMP)
    }

    pub fn set_modified_time(&mut self, timestamp: i64) {
        self.modified_timestamp = Some(timestamp);
    }

    pub fn touch(&mut self) -> i64 {
        let now = unix_now();
        self.set_modified_time(now);
        now
    }
}

impl TranslationIdentity for SourceTranslation {
    fn language(&self) -> &Language {
        &self.translation.language
    }

    fn project(&self) -> &Project {
        &self.translation.project
    }

    fn resource(&self) -> &Resource {
        &self.translation.resource
    }
}

fn unix_now() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => i64::try_from(d.as_secs()).unwrap_or(i64::MAX),
        // clock set before 1970
        Err(e) => i64::try_from(e.duration().as_secs()).map(|s| -s).unwrap_or(i64::MIN),
    }
}
