/// Environment variable that overrides the input length limit.
pub const MAX_TEXT_LENGTH_VAR: &str = "MAX_TEXT_LENGTH";

pub const DEFAULT_MAX_TEXT_LENGTH: usize = 2000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {source_name} value {value:?}: expected a positive integer")]
    InvalidMaxLength { source_name: String, value: String },
}

/// Runtime settings for the input boundary. The engine itself reads none of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_text_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

impl Config {
    pub fn new(max_text_length: usize) -> Result<Self, ConfigError> {
        if max_text_length == 0 {
            return Err(ConfigError::InvalidMaxLength {
                source_name: "max length".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(Self { max_text_length })
    }

    /// Defaults, overridden by `MAX_TEXT_LENGTH` when it is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(MAX_TEXT_LENGTH_VAR) {
            Ok(raw) => Self::parse_max_length(MAX_TEXT_LENGTH_VAR, &raw),
            Err(_) => Ok(Self::default()),
        }
    }

    fn parse_max_length(source_name: &str, raw: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidMaxLength {
            source_name: source_name.to_string(),
            value: raw.to_string(),
        };
        let n: usize = raw.trim().parse().map_err(|_| invalid())?;
        if n == 0 {
            return Err(invalid());
        }
        Ok(Self { max_text_length: n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_is_2000() {
        assert_eq!(Config::default().max_text_length, 2000);
    }

    #[test]
    fn parses_positive_lengths() {
        let config = Config::parse_max_length(MAX_TEXT_LENGTH_VAR, " 500 ").unwrap();
        assert_eq!(config.max_text_length, 500);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!(Config::parse_max_length(MAX_TEXT_LENGTH_VAR, "0").is_err());
        let err = Config::parse_max_length(MAX_TEXT_LENGTH_VAR, "lots").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid MAX_TEXT_LENGTH value \"lots\": expected a positive integer"
        );
        assert!(Config::new(0).is_err());
    }
}
