use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Resource {
    pub slug: String,

    #[serde(default, alias = "title")]
    pub name: String,

    #[serde(default)]
    pub version: String,
}

impl Resource {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            version: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::Project;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_title_alias() {
        let res: Resource = serde_json::from_str(r#"{"slug": "ulb", "title": "Unlocked Literal Bible"}"#).unwrap();
        assert_eq!(res, Resource::new("ulb", "Unlocked Literal Bible"));

        let proj: Project = serde_json::from_str(r#"{"slug": "gen", "title": "Genesis"}"#).unwrap();
        assert_eq!(proj, Project::new("gen", "Genesis"));
    }
}
