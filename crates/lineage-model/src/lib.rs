//! Data model for the lineage pipeline.
//!
//! People are identified purely by their normalized name ([`Token`]). The
//! materialized output is a [`FamilyTree`]: one [`TreeNode`] when the data has
//! a single root, otherwise an ordered forest.

pub mod error;
pub mod token;
pub mod tree;

pub use error::{ModelError, Result};
pub use token::{MISSING_SENTINELS, Token, is_missing_sentinel};
pub use tree::{FamilyTree, TreeNode};
