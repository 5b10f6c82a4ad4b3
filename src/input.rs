use crate::config::Config;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("text cannot be empty or whitespace only")]
    Empty,
    #[error("text exceeds maximum length of {max} characters (got {length})")]
    TooLong { length: usize, max: usize },
}

/// Trim `raw` and check it against the configured limits.
///
/// Length is counted in characters after trimming.
pub fn validate_input<'a>(raw: &'a str, config: &Config) -> Result<&'a str, InputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    let length = text.chars().count();
    if length > config.max_text_length {
        return Err(InputError::TooLong {
            length,
            max: config.max_text_length,
        });
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let config = Config::default();
        assert_eq!(validate_input("  hi there \n", &config), Ok("hi there"));
    }

    #[test]
    fn rejects_blank_text() {
        assert_eq!(validate_input(" \t\n", &Config::default()), Err(InputError::Empty));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let config = Config::new(3).unwrap();
        assert_eq!(validate_input("é é", &config), Ok("é é"));
        assert_eq!(
            validate_input("abcd", &config),
            Err(InputError::TooLong { length: 4, max: 3 })
        );
    }
}
