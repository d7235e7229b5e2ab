//! Root selection.

use std::collections::HashSet;

use lineage_model::Token;

use crate::adjacency::AdjacencyMap;

/// Roots chosen for materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSelection {
    /// Roots in parent insertion order.
    pub roots: Vec<Token>,
    /// True when no parent qualified and every parent was promoted to root.
    pub used_fallback: bool,
}

/// Picks the parents that never appear as anyone's child.
///
/// When every parent is also a child (a fully cyclic table) all parents
/// become roots. That fallback can repeat subtrees across roots; it is not
/// deduplicated.
pub fn select_roots(map: &AdjacencyMap) -> RootSelection {
    let all_children: HashSet<&Token> = map.iter().flat_map(|(_, children)| children).collect();
    let roots: Vec<Token> = map
        .parents()
        .filter(|parent| !all_children.contains(parent))
        .cloned()
        .collect();
    if roots.is_empty() && !map.is_empty() {
        tracing::warn!(
            parents = map.len(),
            "no parent is free of incoming links; treating every parent as a root"
        );
        return RootSelection {
            roots: map.parents().cloned().collect(),
            used_fallback: true,
        };
    }
    RootSelection {
        roots,
        used_fallback: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(value: &str) -> Token {
        Token::new(value).unwrap()
    }

    fn names(selection: &RootSelection) -> Vec<&str> {
        selection.roots.iter().map(Token::as_str).collect()
    }

    #[test]
    fn chain_has_single_root() {
        let map: AdjacencyMap = [(t("a"), vec![t("b")]), (t("b"), vec![t("c")])]
            .into_iter()
            .collect();
        let selection = select_roots(&map);
        assert_eq!(names(&selection), vec!["a"]);
        assert!(!selection.used_fallback);
    }

    #[test]
    fn independent_families_keep_insertion_order() {
        let map: AdjacencyMap = [
            (t("z"), vec![t("y")]),
            (t("a"), vec![t("b")]),
            (t("y"), vec![t("x")]),
        ]
        .into_iter()
        .collect();
        assert_eq!(names(&select_roots(&map)), vec!["z", "a"]);
    }

    #[test]
    fn cycle_falls_back_to_every_parent() {
        let map: AdjacencyMap = [(t("a"), vec![t("b")]), (t("b"), vec![t("a")])]
            .into_iter()
            .collect();
        let selection = select_roots(&map);
        assert_eq!(names(&selection), vec!["a", "b"]);
        assert!(selection.used_fallback);
    }

    #[test]
    fn self_loop_alone_falls_back() {
        let map: AdjacencyMap = [(t("a"), vec![t("a")])].into_iter().collect();
        let selection = select_roots(&map);
        assert_eq!(names(&selection), vec!["a"]);
        assert!(selection.used_fallback);
    }

    #[test]
    fn empty_map_has_no_roots() {
        let selection = select_roots(&AdjacencyMap::new());
        assert!(selection.roots.is_empty());
        assert!(!selection.used_fallback);
    }
}
