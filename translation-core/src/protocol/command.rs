#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    TranslationSlug,
    SourceTranslationNew,
    SourceTranslationFromContainer,
    SourceTranslationFromTranslation,
    SourceTranslationSetModifiedTime,
    SourceTranslationTouch,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "translation.slug" => Command::TranslationSlug,
            "source_translation.new" => Command::SourceTranslationNew,
            "source_translation.from_container" => Command::SourceTranslationFromContainer,
            "source_translation.from_translation" => Command::SourceTranslationFromTranslation,
            "source_translation.set_modified_time" => Command::SourceTranslationSetModifiedTime,
            "source_translation.touch" => Command::SourceTranslationTouch,
            _ => Command::Unknown,
        }
    }
}
