use serde::{Deserialize, Serialize};

/// Default upper bound for addition and subtraction operands
pub const DEFAULT_LIMIT: u32 = 100;

/// Drill configuration.
///
/// Every field is optional. Values given on the command line are layered on
/// top of the file with [`Config::merged_over`].
///
/// Example YAML:
/// ```yaml
/// limit: 20
/// time_limit: "5m"
/// operations: "+-*"
/// tables: [7, 8]
/// repeat_until_correct: false
/// celebrate: true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Upper bound for addition sums and subtraction minuends (default: 100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Session length, e.g. "90", "90s", "5m". Unbounded if unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<String>,

    /// Operations to practice as symbols, e.g. "+-". Skips the selection prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations: Option<String>,

    /// Times tables (digits 0-9) to practice. Skips the tables prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<u8>>,

    /// Re-ask a task until it is answered correctly (default: false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_until_correct: Option<bool>,

    /// Add a random emoji to the success message (default: true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celebrate: Option<bool>,
}

impl Config {
    /// Config written by `arith-drill init`
    pub fn starter() -> Self {
        Self {
            limit: Some(DEFAULT_LIMIT),
            time_limit: Some("5m".to_string()),
            operations: None,
            tables: None,
            repeat_until_correct: Some(false),
            celebrate: Some(true),
        }
    }

    /// Layer `self` on top of `base`: fields set in `self` win
    pub fn merged_over(self, base: Config) -> Config {
        Config {
            limit: self.limit.or(base.limit),
            time_limit: self.time_limit.or(base.time_limit),
            operations: self.operations.or(base.operations),
            tables: self.tables.or(base.tables),
            repeat_until_correct: self.repeat_until_correct.or(base.repeat_until_correct),
            celebrate: self.celebrate.or(base.celebrate),
        }
    }

    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert!(config.limit.is_none());
        assert!(config.time_limit.is_none());
        assert_eq!(config.effective_limit(), 100);
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
limit: 20
time_limit: "5m"
operations: "+-*"
tables: [7, 8]
repeat_until_correct: true
celebrate: false
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.limit, Some(20));
        assert_eq!(config.time_limit.as_deref(), Some("5m"));
        assert_eq!(config.operations.as_deref(), Some("+-*"));
        assert_eq!(config.tables, Some(vec![7, 8]));
        assert_eq!(config.repeat_until_correct, Some(true));
        assert_eq!(config.celebrate, Some(false));
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = "limit: 10\n";
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.limit, Some(10));
        assert!(config.operations.is_none());
        assert!(config.celebrate.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "limit: 10\nnumber_limit: 20\n";
        let result: Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_starter_roundtrip() {
        let config = Config::starter();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_merged_over_prefers_overrides() {
        let file = Config {
            limit: Some(50),
            time_limit: Some("2m".to_string()),
            celebrate: Some(false),
            ..Config::default()
        };
        let cli = Config {
            limit: Some(10),
            operations: Some("+".to_string()),
            ..Config::default()
        };
        let merged = cli.merged_over(file);
        assert_eq!(merged.limit, Some(10));
        assert_eq!(merged.time_limit.as_deref(), Some("2m"));
        assert_eq!(merged.operations.as_deref(), Some("+"));
        assert_eq!(merged.celebrate, Some(false));
        assert!(merged.tables.is_none());
    }
}
