// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions driving a [`Visitor`] over the tree.

use super::traits::{VisitResult, Visitor};
use crate::nodes::{Declaration, File, ImportDirective, Member, Scope};

/// Walk a [`File`] node: directives first, then members.
pub fn walk_file<V: Visitor>(visitor: &mut V, node: &File) -> VisitResult {
    let result = visitor.visit_file(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for import in &node.imports {
                if walk_import(visitor, import) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
            for member in &node.members {
                if walk_member(visitor, member) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_file(node);
    VisitResult::Continue
}

/// Walk a [`Member`] node, dispatching on its kind.
pub fn walk_member<V: Visitor>(visitor: &mut V, node: &Member) -> VisitResult {
    let result = visitor.visit_member(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let child = match node {
                Member::Scope(scope) => walk_scope(visitor, scope),
                Member::Declaration(decl) => walk_declaration(visitor, decl),
            };
            if child == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_member(node);
    VisitResult::Continue
}

/// Walk a [`Scope`] node: directives first, then nested members.
pub fn walk_scope<V: Visitor>(visitor: &mut V, node: &Scope) -> VisitResult {
    let result = visitor.visit_scope(node);
    match result {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for import in &node.imports {
                if walk_import(visitor, import) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
            for member in &node.members {
                if walk_member(visitor, member) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_scope(node);
    VisitResult::Continue
}

/// Walk an [`ImportDirective`] node (a leaf).
pub fn walk_import<V: Visitor>(visitor: &mut V, node: &ImportDirective) -> VisitResult {
    if visitor.visit_import(node) == VisitResult::Stop {
        return VisitResult::Stop;
    }
    visitor.leave_import(node);
    VisitResult::Continue
}

/// Walk a [`Declaration`] node (a leaf).
pub fn walk_declaration<V: Visitor>(visitor: &mut V, node: &Declaration) -> VisitResult {
    if visitor.visit_declaration(node) == VisitResult::Stop {
        return VisitResult::Stop;
    }
    visitor.leave_declaration(node);
    VisitResult::Continue
}
