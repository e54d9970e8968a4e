pub const TABLE_NAME_VAR: &str = "TABLE_NAME";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";
pub const DEFAULT_TABLE_NAME: &str = "FloresOrders";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("text") {
            Self::Text
        } else {
            Self::Json
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    pub table_name: String,
    pub log_format: LogFormat,
}

impl IntakeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            table_name: non_blank(TABLE_NAME_VAR)
                .map(|value| value.trim().to_string())
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            log_format: non_blank(LOG_FORMAT_VAR)
                .map(|value| LogFormat::parse(&value))
                .unwrap_or(LogFormat::Json),
        }
    }
}
