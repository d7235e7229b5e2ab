//! End-to-end tree construction.

use std::time::Instant;

use lineage_model::FamilyTree;
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::adjacency::{AdjacencyBuilder, SkippedRow};
use crate::materialize::materialize_roots;
use crate::names::transform_family;
use crate::roots::select_roots;

/// Counts describing one build, for summaries and logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub rows_read: usize,
    pub rows_skipped: Vec<SkippedRow>,
    pub parent_count: usize,
    pub edge_count: usize,
    pub root_count: usize,
    pub used_root_fallback: bool,
    pub node_count: usize,
    pub depth: usize,
}

impl BuildReport {
    pub fn rows_used(&self) -> usize {
        self.rows_read - self.rows_skipped.len()
    }
}

#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub tree: FamilyTree,
    pub report: BuildReport,
}

/// Runs normalization, adjacency, root selection, materialization and name
/// cleanup over a headerless table.
///
/// Never fails: unusable rows are skipped and listed in the report.
pub fn build_family_tree<R, S>(rows: impl IntoIterator<Item = R>) -> BuildOutput
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let started = Instant::now();

    let mut builder = AdjacencyBuilder::new();
    info_span!("adjacency").in_scope(|| {
        for row in rows {
            builder.push_row(row.as_ref());
        }
    });
    let rows_read = builder.rows_read();
    let (map, rows_skipped) = builder.finish();
    debug!(
        rows_read,
        rows_skipped = rows_skipped.len(),
        parents = map.len(),
        edges = map.edge_count(),
        "adjacency built"
    );

    let selection = select_roots(&map);
    let mut tree = info_span!("materialize", roots = selection.roots.len())
        .in_scope(|| materialize_roots(&selection.roots, &map));
    transform_family(&mut tree);

    let report = BuildReport {
        rows_read,
        rows_skipped,
        parent_count: map.len(),
        edge_count: map.edge_count(),
        root_count: selection.roots.len(),
        used_root_fallback: selection.used_fallback,
        node_count: tree.node_count(),
        depth: tree.depth(),
    };
    info!(
        rows = report.rows_read,
        skipped = report.rows_skipped.len(),
        roots = report.root_count,
        nodes = report.node_count,
        duration_ms = started.elapsed().as_millis(),
        "family tree built"
    );
    BuildOutput { tree, report }
}
