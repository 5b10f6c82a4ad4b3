use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z']+").unwrap());

/// Lowercase `text` and pull out maximal runs of ASCII letters and apostrophes.
///
/// Everything else (digits, punctuation, whitespace, non-ASCII letters) is a
/// separator. Both pipelines tokenize through here.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_digits() {
        assert_eq!(
            tokenize("I'm NOT ok -- 42 times, really!"),
            vec!["i'm", "not", "ok", "times", "really"]
        );
    }

    #[test]
    fn hyphenated_words_become_separate_tokens() {
        assert_eq!(tokenize("all-or-nothing"), vec!["all", "or", "nothing"]);
    }

    #[test]
    fn empty_and_separator_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" 123 ... !!").is_empty());
    }
}
