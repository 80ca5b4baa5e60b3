use serde::{Deserialize, Serialize};

use super::language::Language;
use super::project::Project;
use super::resource::Resource;

/// Anything that names one translated edition of a work.
pub trait TranslationIdentity {
    fn language(&self) -> &Language;
    fn project(&self) -> &Project;
    fn resource(&self) -> &Resource;

    /// `{language}_{project}_{resource}`, e.g. `en_gen_ulb`.
    fn slug(&self) -> String {
        format!(
            "{}_{}_{}",
            self.language().slug,
            self.project().slug,
            self.resource().slug
        )
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Translation {
    pub language: Language,
    pub project: Project,
    pub resource: Resource,
}

impl Translation {
    pub fn new(language: Language, project: Project, resource: Resource) -> Self {
        Self {
            language,
            project,
            resource,
        }
    }

    pub fn from_identity(identity: &impl TranslationIdentity) -> Self {
        Self::new(
            identity.language().clone(),
            identity.project().clone(),
            identity.resource().clone(),
        )
    }
}

impl TranslationIdentity for Translation {
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

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    pub(crate) fn sample() -> Translation {
        Translation::new(
            Language::new("en", "English"),
            Project::new("gen", "Genesis"),
            Resource::new("ulb", "Unlocked Literal Bible"),
        )
    }

    #[rstest]
    #[case("en", "gen", "ulb", "en_gen_ulb")]
    #[case("pt-br", "mat", "udb", "pt-br_mat_udb")]
    #[case("", "", "", "__")]
    fn slug_joins_the_three_slugs(
        #[case] lang: &str,
        #[case] project: &str,
        #[case] resource: &str,
        #[case] expected: &str,
    ) {
        let t = Translation::new(
            Language::new(lang, ""),
            Project::new(project, ""),
            Resource::new(resource, ""),
        );
        assert_eq!(t.slug(), expected);
    }

    #[test]
    fn from_identity_copies_every_part() {
        let original = sample();
        let copy = Translation::from_identity(&original);
        assert_eq!(copy, original);
    }
}
