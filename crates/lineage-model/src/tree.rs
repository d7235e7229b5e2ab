use serde::{Deserialize, Serialize};

/// A person in the materialized tree.
///
/// `name` starts out as the person's token text and is later rewritten into
/// a display name; `children` is never reshaped after materialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TreeNode::depth).max().unwrap_or(0)
    }
}

/// Materialized output: one tree for a single root, a forest otherwise.
///
/// Serializes untagged, so a single tree is a JSON object and a forest is a
/// JSON array of objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FamilyTree {
    Single(TreeNode),
    Forest(Vec<TreeNode>),
}

impl FamilyTree {
    /// Collapses exactly one root into [`FamilyTree::Single`].
    pub fn from_roots(mut roots: Vec<TreeNode>) -> Self {
        if roots.len() == 1
            && let Some(root) = roots.pop()
        {
            return Self::Single(root);
        }
        Self::Forest(roots)
    }

    pub fn roots(&self) -> &[TreeNode] {
        match self {
            Self::Single(root) => std::slice::from_ref(root),
            Self::Forest(roots) => roots,
        }
    }

    pub fn roots_mut(&mut self) -> &mut [TreeNode] {
        match self {
            Self::Single(root) => std::slice::from_mut(root),
            Self::Forest(roots) => roots,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roots().is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.roots().iter().map(TreeNode::node_count).sum()
    }

    pub fn depth(&self) -> usize {
        self.roots().iter().map(TreeNode::depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_root_collapses() {
        let tree = FamilyTree::from_roots(vec![TreeNode::leaf("a")]);
        assert_eq!(tree, FamilyTree::Single(TreeNode::leaf("a")));
        assert_eq!(tree.roots().len(), 1);
    }

    #[test]
    fn zero_or_many_roots_stay_a_forest() {
        assert_eq!(FamilyTree::from_roots(vec![]), FamilyTree::Forest(vec![]));
        let tree = FamilyTree::from_roots(vec![TreeNode::leaf("a"), TreeNode::leaf("b")]);
        assert!(matches!(tree, FamilyTree::Forest(ref roots) if roots.len() == 2));
    }

    #[test]
    fn counts_nodes_and_depth() {
        let tree = FamilyTree::Single(TreeNode::with_children(
            "a",
            vec![
                TreeNode::with_children("b", vec![TreeNode::leaf("c")]),
                TreeNode::leaf("d"),
            ],
        ));
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.depth(), 3);
        assert!(!tree.roots()[0].is_leaf());
        assert!(tree.roots()[0].children[1].is_leaf());
    }

    #[test]
    fn serializes_untagged() {
        let single = FamilyTree::Single(TreeNode::leaf("a"));
        assert_eq!(
            serde_json::to_string(&single).unwrap(),
            r#"{"name":"a","children":[]}"#
        );
        let forest = FamilyTree::Forest(vec![TreeNode::leaf("a")]);
        assert_eq!(
            serde_json::to_string(&forest).unwrap(),
            r#"[{"name":"a","children":[]}]"#
        );
        let parsed: FamilyTree = serde_json::from_str(r#"[{"name":"x"}]"#).unwrap();
        assert_eq!(parsed, FamilyTree::Forest(vec![TreeNode::leaf("x")]));
    }
}
