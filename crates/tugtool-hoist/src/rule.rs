//! The contract between a syntax rule and the pipeline that runs it.

use serde::Serialize;

use tugtool_hoist_cst::SyntaxNode;

/// Position of a rule in a pipeline; lower runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RuleOrder(pub u32);

impl RuleOrder {
    /// Import hoisting runs before rules that reformat the directive block.
    pub const HOIST_IMPORTS: RuleOrder = RuleOrder(1);
}

/// A purely syntactic rewrite of one tree.
///
/// `process` must not fail: a rule that cannot apply returns its input.
pub trait SyntaxRule {
    /// Stable identifier used in logs and pipeline configuration.
    fn name(&self) -> &'static str;

    fn order(&self) -> RuleOrder;

    fn process(&self, node: SyntaxNode) -> SyntaxNode;
}
