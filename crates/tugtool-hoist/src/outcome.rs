//! Structured result of a hoisting run.

use serde::Serialize;

use tugtool_hoist_cst::{File, NodeId};

/// What [`crate::Hoister::hoist`] decided for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoistOutcome {
    /// No top-level scope owns a directive.
    Unchanged,
    /// An aliased directive made the file unsafe to rewrite.
    Abstained(AliasBlocker),
    /// Directives were moved; `file` is the rewritten tree.
    Hoisted { file: File, report: HoistReport },
}

impl HoistOutcome {
    pub fn is_hoisted(&self) -> bool {
        matches!(self, HoistOutcome::Hoisted { .. })
    }

    pub fn report(&self) -> Option<&HoistReport> {
        match self {
            HoistOutcome::Hoisted { report, .. } => Some(report),
            _ => None,
        }
    }
}

/// The aliased directive that stopped the rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasBlocker {
    /// Name of the scope declaring the directive.
    pub scope: String,
    pub alias: String,
    pub target: String,
}

/// Directives moved out of one scope, in their declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoistedScope {
    pub scope: String,
    pub node_id: NodeId,
    pub targets: Vec<String>,
}

/// Per-scope record of a successful rewrite, in scope discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HoistReport {
    pub scopes: Vec<HoistedScope>,
}

impl HoistReport {
    /// Total number of directives moved to file scope.
    pub fn moved_count(&self) -> usize {
        self.scopes.iter().map(|scope| scope.targets.len()).sum()
    }
}
