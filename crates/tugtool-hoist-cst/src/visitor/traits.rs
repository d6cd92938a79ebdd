// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definitions for CST traversal.

use crate::nodes::{Declaration, File, ImportDirective, Member, Scope};

/// Result of visiting a node - controls traversal behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue traversal into children.
    ///
    /// After visiting children, `leave_*` will be called for this node.
    #[default]
    Continue,

    /// Skip children, continue with siblings.
    ///
    /// `leave_*` is still called for this node.
    SkipChildren,

    /// Stop traversal entirely.
    Stop,
}

/// Generates pairs of `visit_*` and `leave_*` methods with default
/// implementations that continue traversal and do nothing, respectively.
macro_rules! visitor_methods {
    (
        $(
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                #[doc = concat!("Visit a [`", stringify!($node_type), "`] node.")]
                #[allow(unused_variables)]
                fn [<visit_ $base_name>](&mut self, node: &$node_type) -> VisitResult {
                    VisitResult::Continue
                }

                #[doc = concat!("Leave a [`", stringify!($node_type), "`] node.")]
                #[allow(unused_variables)]
                fn [<leave_ $base_name>](&mut self, node: &$node_type) {}
            )*
        }
    };
}

/// Read-only traversal over a tree.
///
/// Traversal is depth-first: `visit_*` in pre-order, `leave_*` in post-order,
/// children in source order. Within a file or scope, directives are visited
/// before members, matching rendering order.
pub trait Visitor {
    visitor_methods! {
        file: File,
        member: Member,
        scope: Scope,
        import: ImportDirective,
        declaration: Declaration,
    }
}
