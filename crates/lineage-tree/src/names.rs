//! Display-name rewriting.
//!
//! Source tables tell apart people with the same name by a numeric suffix
//! (`john2`). The suffix is dropped for display and the name is capitalized.

use std::sync::LazyLock;

use lineage_model::{FamilyTree, TreeNode};
use regex::Regex;

static NUMERIC_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+$").expect("Invalid numeric suffix regex"));

/// Strips trailing digits, then uppercases the first character and
/// lowercases the rest.
pub fn clean_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    let stripped = NUMERIC_SUFFIX_REGEX.replace(name, "");
    capitalize(&stripped)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    first
        .to_uppercase()
        .chain(chars.as_str().to_lowercase().chars())
        .collect()
}

/// Rewrites every name in the subtree, parent before children.
pub fn transform_names(node: &mut TreeNode) -> &mut TreeNode {
    node.name = clean_name(&node.name);
    for child in &mut node.children {
        transform_names(child);
    }
    node
}

/// Rewrites every name of a single tree or of each tree in a forest.
pub fn transform_family(tree: &mut FamilyTree) -> &mut FamilyTree {
    for root in tree.roots_mut() {
        transform_names(root);
    }
    tree
}
