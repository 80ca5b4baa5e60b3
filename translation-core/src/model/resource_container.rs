use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::language::Language;
use super::project::Project;
use super::resource::Resource;
use super::translation::{Translation, TranslationIdentity};

/// A translation identity bundled with its content, keyed by chunk id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResourceContainer {
    pub language: Language,
    pub project: Project,
    pub resource: Resource,

    #[serde(default)]
    pub chunks: BTreeMap<String, String>,
}

impl ResourceContainer {
    pub fn new(language: Language, project: Project, resource: Resource) -> Self {
        Self {
            language,
            project,
            resource,
            chunks: BTreeMap::new(),
        }
    }

    pub fn with_chunk(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.chunks.insert(id.into(), text.into());
        self
    }

    pub fn chunk(&self, id: &str) -> Option<&str> {
        self.chunks.get(id).map(String::as_str)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

impl TranslationIdentity for ResourceContainer {
    fn language(&self) -> &Language {
        &self.language
    }

    fn project(&self) -> &Project {
        &self.project
    }

    fn resource(&self) -> &Resource {
        &self.resource
    }
}

impl From<&ResourceContainer> for Translation {
    fn from(container: &ResourceContainer) -> Self {
        Translation::from_identity(container)
    }
}
