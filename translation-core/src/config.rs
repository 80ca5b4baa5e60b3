use std::env;

const LOG_ENV: &str = "TRANSLATION_CORE_LOG";
const ANSI_ENV: &str = "TRANSLATION_CORE_ANSI";

fn default_log_filter() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_filter: String,
    pub ansi: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            ansi: false,
        }
    }
}

impl CoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup(LOG_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_log_filter);

        let ansi = match lookup(ANSI_ENV) {
            Some(v) => !matches!(v.trim().to_ascii_lowercase().as_str(), "" | "0" | "false" | "no"),
            None => false,
        };

        Self { log_filter, ansi }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn defaults_when_env_is_empty() {
        assert_eq!(CoreConfig::from_lookup(|_| None), CoreConfig::default());
    }

    #[rstest]
    #[case("1", true)]
    #[case("true", true)]
    #[case("FALSE", false)]
    #[case("0", false)]
    #[case("", false)]
    fn reads_ansi_flag(#[case] raw: &str, #[case] expected: bool) {
        let cfg = CoreConfig::from_lookup(|k| (k == ANSI_ENV).then(|| raw.to_string()));
        assert_eq!(cfg.ansi, expected);
    }

    #[test]
    fn blank_log_filter_falls_back_to_default() {
        let cfg = CoreConfig::from_lookup(|k| (k == LOG_ENV).then(|| "  ".to_string()));
        assert_eq!(cfg.log_filter, "warn");

        let cfg = CoreConfig::from_lookup(|k| (k == LOG_ENV).then(|| "translation_core=debug".to_string()));
        assert_eq!(cfg.log_filter, "translation_core=debug");
    }
}
