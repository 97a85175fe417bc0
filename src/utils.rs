/// Prefixes a message so log lines and error bodies emitted by this crate are easy to spot.
pub(crate) fn inertia_err_msg(msg: impl AsRef<str>) -> String {
    format!("[Inertia] {}", msg.as_ref())
}

/// Splits `value` by `separator`, trimming every token and discarding the empty ones.
pub(crate) fn split_and_remove_empty(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod test {
    use super::split_and_remove_empty;

    #[test]
    fn test_split_discards_empty_tokens() {
        assert_eq!(
            split_and_remove_empty("events, users,,", ','),
            vec!["events".to_string(), "users".to_string()]
        );
        assert!(split_and_remove_empty("", ',').is_empty());
        assert!(split_and_remove_empty(",,", ',').is_empty());
    }
}
