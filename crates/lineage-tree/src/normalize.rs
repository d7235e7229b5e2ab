//! Cell normalization.
//!
//! A relative cell may list several people separated by `,`, `;` or `|`.
//! Each becomes its own token. The parent cell is never split.

use std::sync::LazyLock;

use lineage_model::Token;
use regex::Regex;

/// Characters that separate several people inside one relative cell.
pub const DELIMITERS: &[char] = &[',', ';', '|'];

/// One or more consecutive delimiters.
static SPLIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;|]+").expect("Invalid delimiter regex"));

/// Normalizes one relative cell into zero or more tokens.
///
/// Blank cells and missing sentinels (`nan`, `none`) produce nothing. The
/// sentinel check applies to the whole cell, not to split parts.
pub fn normalize_cell(raw: &str) -> Vec<Token> {
    let Some(whole) = Token::from_cell(raw) else {
        return Vec::new();
    };
    if !whole.as_str().contains(DELIMITERS) {
        return vec![whole];
    }
    SPLIT_REGEX
        .split(whole.as_str())
        .filter_map(|part| Token::new(part).ok())
        .collect()
}

/// Canonicalizes the parent cell of a row without splitting it.
///
/// Returns `None` when the row has no usable parent and must be skipped.
pub fn parent_token(raw: &str) -> Option<Token> {
    Token::from_cell(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn single_value_is_trimmed_and_lowercased() {
        assert_eq!(texts(&normalize_cell("  John Smith ")), vec!["john smith"]);
    }

    #[test]
    fn blank_and_sentinels_yield_nothing() {
        assert!(normalize_cell("").is_empty());
        assert!(normalize_cell("   ").is_empty());
        assert!(normalize_cell("NaN").is_empty());
        assert!(normalize_cell("None").is_empty());
    }

    #[test]
    fn splits_on_delimiter_runs() {
        assert_eq!(
            texts(&normalize_cell("Ben, Carl;;Dora | Eve")),
            vec!["ben", "carl", "dora", "eve"]
        );
        assert_eq!(texts(&normalize_cell(",,Ben,|")), vec!["ben"]);
        assert!(normalize_cell(" , ; | ").is_empty());
    }

    #[test]
    fn sentinel_inside_a_list_is_kept() {
        assert_eq!(texts(&normalize_cell("nan, Ben")), vec!["nan", "ben"]);
    }

    #[test]
    fn parent_is_not_split() {
        assert_eq!(parent_token(" Anna, Ben ").unwrap().as_str(), "anna, ben");
        assert_eq!(parent_token("none"), None);
        assert_eq!(parent_token(""), None);
    }

    proptest! {
        #[test]
        fn normalizing_a_token_is_idempotent(raw in "[A-Za-z][A-Za-z0-9 ]{0,12}") {
            let first = normalize_cell(&raw);
            prop_assume!(first.len() == 1);
            let again = normalize_cell(first[0].as_str());
            prop_assert_eq!(again, first);
        }

        #[test]
        fn delimited_cell_yields_one_token_per_part(
            parts in proptest::collection::vec("[a-z][a-z0-9]{0,6}", 1..6),
            separators in proptest::collection::vec("[,;|]{1,3}", 5),
        ) {
            let mut cell = parts[0].clone();
            for (idx, part) in parts.iter().enumerate().skip(1) {
                cell.push_str(&separators[idx - 1]);
                cell.push(' ');
                cell.push_str(part);
            }
            prop_assume!(parts.len() > 1);
            let tokens = normalize_cell(&cell);
            prop_assert_eq!(tokens.len(), parts.len());
            prop_assert_eq!(texts(&tokens), parts.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
