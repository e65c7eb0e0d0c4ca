/// Lowercases `query` and splits it on whitespace.
///
/// Empty tokens are dropped; repeated terms are kept and each one counts.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize_query("  Steel\tALMIRAH \n wardrobe "),
            vec!["steel", "almirah", "wardrobe"]
        );
    }

    #[test]
    fn test_tokenize_blank_is_empty() {
        assert!(tokenize_query("").is_empty());
        assert!(tokenize_query("   \t ").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_repeats() {
        assert_eq!(tokenize_query("chair chair"), vec!["chair", "chair"]);
    }
}
