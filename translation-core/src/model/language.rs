use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Language {
    pub slug: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub direction: LanguageDirection,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LanguageDirection {
    Ltr,
    Rtl,
}

impl Default for LanguageDirection {
    fn default() -> Self {
        LanguageDirection::Ltr
    }
}

impl Language {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            direction: LanguageDirection::default(),
        }
    }
}
