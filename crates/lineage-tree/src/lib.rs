//! Family tree construction.
//!
//! Turns headerless genealogy rows into a [`FamilyTree`]:
//!
//! 1. [`normalize`] splits and canonicalizes raw cells into [`Token`]s.
//! 2. [`adjacency`] merges rows into an ordered parent -> children map.
//! 3. [`roots`] picks the tokens that are never anyone's child.
//! 4. [`materialize`] expands each root into nested nodes, truncating cycles.
//! 5. [`names`] rewrites tokens into display names.
//!
//! [`pipeline::build_family_tree`] runs all stages and [`writer`] serializes
//! the result.

pub mod adjacency;
pub mod error;
pub mod materialize;
pub mod names;
pub mod normalize;
pub mod pipeline;
pub mod roots;
pub mod writer;

pub use lineage_model::{FamilyTree, Token, TreeNode};

pub use adjacency::{AdjacencyBuilder, AdjacencyMap, RowOutcome, SkipReason, SkippedRow};
pub use error::{BuildError, Result};
pub use materialize::{materialize, materialize_roots};
pub use names::{clean_name, transform_family, transform_names};
pub use normalize::{normalize_cell, parent_token};
pub use pipeline::{BuildOutput, BuildReport, build_family_tree};
pub use roots::{RootSelection, select_roots};
pub use writer::{to_json_string, write_json};
