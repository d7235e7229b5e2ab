//! Integration tests for the full table -> tree pipeline.

use lineage_tree::{FamilyTree, TreeNode, build_family_tree, to_json_string};

#[test]
fn builds_the_documented_example() {
    let rows = vec![
        vec!["root", "child1", "child2"],
        vec!["child1", "grandchild1"],
    ];
    let output = build_family_tree(rows);

    let compact = serde_json::to_string(&output.tree).expect("serialize tree");
    assert_eq!(
        compact,
        r#"{"name":"Root","children":[{"name":"Child1","children":[{"name":"Grandchild1","children":[]}]},{"name":"Child2","children":[]}]}"#
    );

    insta::assert_json_snapshot!(output.tree, @r###"
    {
      "name": "Root",
      "children": [
        {
          "name": "Child1",
          "children": [
            {
              "name": "Grandchild1",
              "children": []
            }
          ]
        },
        {
          "name": "Child2",
          "children": []
        }
      ]
    }
    "###);
}

#[test]
fn messy_spreadsheet_rows_degrade_gracefully() {
    let rows = vec![
        vec!["  Grandpa Joe ", "Dad1; Aunt Sue", "nan"],
        vec!["NaN", "ghost"],
        vec!["", "nobody"],
        vec!["dad1", "Kid2 | kid3,, KID2", ""],
        vec!["Grandpa Joe", "Aunt Sue", "Dad1"],
    ];
    let output = build_family_tree(rows);

    assert_eq!(
        output.tree,
        FamilyTree::Single(TreeNode::with_children(
            "Grandpa joe",
            vec![
                TreeNode::with_children(
                    "Dad",
                    vec![TreeNode::leaf("Kid"), TreeNode::leaf("Kid")]
                ),
                TreeNode::leaf("Aunt sue"),
            ],
        ))
    );
    assert_eq!(output.report.rows_skipped.len(), 2);
}

#[test]
fn disconnected_families_serialize_as_array() {
    let output = build_family_tree([["alice", "bob"], ["carol", "dave"]]);
    let json = to_json_string(&output.tree).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    let roots = value.as_array().expect("forest is an array");
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0]["name"], "Alice");
    assert_eq!(roots[1]["children"][0]["name"], "Dave");
}

#[test]
fn cross_linked_descendant_is_repeated_not_merged() {
    let output = build_family_tree([
        vec!["top", "left", "right"],
        vec!["left", "shared"],
        vec!["right", "shared"],
        vec!["shared", "leaf"],
    ]);
    let FamilyTree::Single(root) = output.tree else {
        panic!("expected a single root");
    };
    for branch in &root.children {
        assert_eq!(branch.children[0].name, "Shared");
        assert_eq!(branch.children[0].children[0].name, "Leaf");
    }
}
