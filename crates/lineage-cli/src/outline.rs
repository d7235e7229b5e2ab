//! Text outline of a family tree for terminal output.

use lineage_model::{FamilyTree, TreeNode};

/// Renders each root and its descendants with box-drawing guides.
///
/// `max_depth` limits how many levels below each root are printed; cut
/// subtrees are marked with an ellipsis and their hidden node count.
pub fn render_outline(tree: &FamilyTree, max_depth: Option<usize>) -> String {
    let mut out = String::new();
    for root in tree.roots() {
        out.push_str(&root.name);
        out.push('\n');
        render_children(root, "", 1, max_depth, &mut out);
    }
    out
}

fn render_children(
    node: &TreeNode,
    prefix: &str,
    depth: usize,
    max_depth: Option<usize>,
    out: &mut String,
) {
    if max_depth.is_some_and(|max| depth > max) {
        if !node.is_leaf() {
            let hidden = node.node_count() - 1;
            out.push_str(&format!("{prefix}└── … ({hidden} more)\n"));
        }
        return;
    }
    let last = node.children.len().saturating_sub(1);
    for (idx, child) in node.children.iter().enumerate() {
        let (branch, guide) = if idx == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(prefix);
        out.push_str(branch);
        out.push_str(&child.name);
        out.push('\n');
        render_children(child, &format!("{prefix}{guide}"), depth + 1, max_depth, out);
    }
}
