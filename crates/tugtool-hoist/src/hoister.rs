//! Moves import directives out of top-level scopes to file scope.
//!
//! # Algorithm
//!
//! The rule repeatedly looks for the first top-level scope that still owns
//! directives, drains it, and appends its directives to the file's directive
//! list, until no such scope remains. Directive order within a scope and scope
//! order within the file are kept.
//!
//! An aliased directive (`using Json = Newtonsoft.Json;`) can bind differently
//! depending on the scope it is declared in, so finding one aborts the whole
//! run and the original tree is returned. Nothing partial is ever observable.
//!
//! When the file had no directives before a drain, the file's leading trivia
//! (typically a header comment) is moved onto the first hoisted directive and
//! one line break is appended to the last hoisted directive, leaving a blank
//! line between the new directive block and the scope that follows.
//!
//! # Termination
//!
//! Each iteration empties one top-level scope and nothing refills a scope, so
//! the loop runs at most `members.len()` drains plus a final scan. The bound is
//! enforced; exceeding it yields [`HoistError::NoFixpoint`].

use tracing::{debug, trace, warn};

use tugtool_hoist_cst::{File, ImportDirective, Member, Scope, SyntaxNode};

use crate::config::HoistConfig;
use crate::error::{HoistError, HoistResult};
use crate::outcome::{AliasBlocker, HoistOutcome, HoistReport, HoistedScope};
use crate::rule::{RuleOrder, SyntaxRule};

/// The import hoisting rule.
#[derive(Debug, Clone, Default)]
pub struct Hoister {
    config: HoistConfig,
}

impl Hoister {
    pub fn new(config: HoistConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HoistConfig {
        &self.config
    }

    /// Rewrite `root`, or return it unchanged.
    ///
    /// Non-file nodes, files with nothing to hoist, files containing an
    /// aliased nested directive and internal failures all yield the input.
    pub fn transform(&self, root: SyntaxNode) -> SyntaxNode {
        let file = match root {
            SyntaxNode::File(file) => file,
            other => {
                trace!(node = %other.node_id(), "not a file node; skipping");
                return other;
            }
        };

        match self.hoist(&file) {
            Ok(HoistOutcome::Hoisted { file, .. }) => SyntaxNode::File(file),
            Ok(HoistOutcome::Unchanged | HoistOutcome::Abstained(_)) => SyntaxNode::File(file),
            Err(err) => {
                warn!(error = %err, "import hoisting failed; leaving file unchanged");
                SyntaxNode::File(file)
            }
        }
    }

    /// Run the fixpoint loop on `original` and report what happened.
    ///
    /// `original` is never modified; on [`HoistOutcome::Unchanged`] and
    /// [`HoistOutcome::Abstained`] the caller keeps using it as the result.
    pub fn hoist(&self, original: &File) -> HoistResult<HoistOutcome> {
        let bound = original.members.len();
        let mut working: Option<File> = None;
        let mut report = HoistReport::default();

        for _ in 0..=bound {
            let current = working.as_ref().unwrap_or(original);
            trace!(
                members = current.members.len(),
                file_imports = current.imports.len(),
                "scanning for scopes with directives"
            );

            let Some((index, scope)) = first_scope_with_imports(current) else {
                return Ok(match working {
                    Some(file) => HoistOutcome::Hoisted { file, report },
                    None => HoistOutcome::Unchanged,
                });
            };

            if let Some(aliased) = scope.imports.iter().find(|import| import.has_alias()) {
                let blocker = AliasBlocker {
                    scope: scope.name.clone(),
                    alias: aliased.alias_name().unwrap_or_default().to_string(),
                    target: aliased.target.clone(),
                };
                debug!(
                    scope = %blocker.scope,
                    alias = %blocker.alias,
                    target = %blocker.target,
                    "aliased directive needs semantic analysis; leaving file unchanged"
                );
                return Ok(HoistOutcome::Abstained(blocker));
            }

            report.scopes.push(HoistedScope {
                scope: scope.name.clone(),
                node_id: scope.node_id(),
                targets: scope.imports.iter().map(|i| i.target.clone()).collect(),
            });
            let next = self.drain_scope(current, index, scope)?;
            working = Some(next);
        }

        Err(HoistError::NoFixpoint {
            iterations: bound + 1,
        })
    }

    /// Empty `scope`, the member at `index` in `file`, and append its
    /// directives to file scope.
    fn drain_scope(&self, file: &File, index: usize, scope: &Scope) -> HoistResult<File> {
        debug!(
            scope = %scope.name,
            count = scope.imports.len(),
            "hoisting directives to file scope"
        );

        let mut hoisted: Vec<ImportDirective> = scope.imports.clone();
        let drained = scope.clone().with_imports(Vec::new());
        let mut next = file.replace_member_at(index, Member::Scope(drained))?;

        if next.imports.is_empty() {
            // First directive block in the file: it takes over the header trivia.
            let header = std::mem::take(&mut next.leading_trivia);
            if let Some(first) = hoisted.first_mut() {
                first.leading_trivia = header;
            }
            if let Some(last) = hoisted.last_mut() {
                let trailing = std::mem::take(&mut last.trailing_trivia);
                last.trailing_trivia = trailing.with_newline(self.config.line_ending.newline());
            }
        }

        Ok(next.add_imports(hoisted))
    }
}

/// Position and contents of the first top-level scope that owns directives.
fn first_scope_with_imports(file: &File) -> Option<(usize, &Scope)> {
    file.members
        .iter()
        .enumerate()
        .filter(|(_, member)| member.has_nested_imports())
        .find_map(|(index, member)| member.as_scope().map(|scope| (index, scope)))
}

impl SyntaxRule for Hoister {
    fn name(&self) -> &'static str {
        "hoist-imports"
    }

    fn order(&self) -> RuleOrder {
        RuleOrder::HOIST_IMPORTS
    }

    fn process(&self, node: SyntaxNode) -> SyntaxNode {
        self.transform(node)
    }
}
