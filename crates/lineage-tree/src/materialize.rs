//! Tree materialization with per-path cycle detection.
//!
//! Each recursive call sees only the tokens on its own root-to-node path.
//! Siblings never share what they visited, so a person reachable through two
//! separate lines is expanded under both, while a true cycle stops at the
//! first repeat.

use std::collections::BTreeSet;

use lineage_model::{FamilyTree, Token, TreeNode};

use crate::adjacency::AdjacencyMap;

/// Expands `token` into a node, given the tokens already on its path.
///
/// A token already on the path becomes a leaf. Tokens without an adjacency
/// entry are leaves too. Worst-case cost is exponential on densely
/// cross-linked tables since nothing is memoized across siblings.
pub fn materialize(token: &Token, map: &AdjacencyMap, visited: &BTreeSet<Token>) -> TreeNode {
    if visited.contains(token) {
        return TreeNode::leaf(token.as_str());
    }
    let mut path = visited.clone();
    path.insert(token.clone());
    let children = map
        .children(token)
        .unwrap_or_default()
        .iter()
        .map(|child| materialize(child, map, &path))
        .collect();
    TreeNode::with_children(token.as_str(), children)
}

/// Materializes every root with a fresh path, collapsing a single root.
pub fn materialize_roots(roots: &[Token], map: &AdjacencyMap) -> FamilyTree {
    let nodes = roots
        .iter()
        .map(|root| materialize(root, map, &BTreeSet::new()))
        .collect();
    FamilyTree::from_roots(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(value: &str) -> Token {
        Token::new(value).unwrap()
    }

    fn node(name: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode::with_children(name, children)
    }

    #[test]
    fn two_cycle_terminates_with_repeat_as_leaf() {
        let map: AdjacencyMap = [(t("a"), vec![t("b")]), (t("b"), vec![t("a")])]
            .into_iter()
            .collect();
        let tree = materialize(&t("a"), &map, &BTreeSet::new());
        assert_eq!(
            tree,
            node("a", vec![node("b", vec![TreeNode::leaf("a")])])
        );
    }

    #[test]
    fn self_loop_repeats_once() {
        let map: AdjacencyMap = [(t("a"), vec![t("a"), t("b")])].into_iter().collect();
        let tree = materialize(&t("a"), &map, &BTreeSet::new());
        assert_eq!(
            tree,
            node("a", vec![TreeNode::leaf("a"), TreeNode::leaf("b")])
        );
    }

    #[test]
    fn shared_descendant_expands_under_each_path() {
        // a -> b -> d -> e and a -> c -> d -> e
        let map: AdjacencyMap = [
            (t("a"), vec![t("b"), t("c")]),
            (t("b"), vec![t("d")]),
            (t("c"), vec![t("d")]),
            (t("d"), vec![t("e")]),
        ]
        .into_iter()
        .collect();
        let tree = materialize(&t("a"), &map, &BTreeSet::new());
        let d = node("d", vec![TreeNode::leaf("e")]);
        assert_eq!(
            tree,
            node(
                "a",
                vec![node("b", vec![d.clone()]), node("c", vec![d])]
            )
        );
    }

    #[test]
    fn siblings_do_not_poison_each_other() {
        // b's descent visits c; c as b's sibling must still expand.
        let map: AdjacencyMap = [
            (t("a"), vec![t("b"), t("c")]),
            (t("b"), vec![t("c")]),
            (t("c"), vec![t("x")]),
        ]
        .into_iter()
        .collect();
        let tree = materialize(&t("a"), &map, &BTreeSet::new());
        assert_eq!(tree.children[1], node("c", vec![TreeNode::leaf("x")]));
        assert_eq!(tree.node_count(), 6);
    }

    #[test]
    fn single_root_is_not_wrapped() {
        let map: AdjacencyMap = [(t("a"), vec![t("b")])].into_iter().collect();
        let tree = materialize_roots(&[t("a")], &map);
        assert!(matches!(tree, FamilyTree::Single(_)));
    }

    #[test]
    fn several_roots_form_a_forest() {
        let map: AdjacencyMap = [(t("a"), vec![t("b")]), (t("b"), vec![t("a")])]
            .into_iter()
            .collect();
        let tree = materialize_roots(&[t("a"), t("b")], &map);
        let FamilyTree::Forest(roots) = tree else {
            panic!("expected a forest");
        };
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[1], node("b", vec![node("a", vec![TreeNode::leaf("b")])]));
    }
}
