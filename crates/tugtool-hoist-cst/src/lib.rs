// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An immutable Concrete Syntax Tree (CST) for files made of scopes and
//! import directives.
//!
//! This crate models the parts of a C#-style compilation unit that import
//! rewriting rules care about, preserving all whitespace and comments so a
//! rewritten tree renders back to source without formatting loss.
//!
//! # Overview
//!
//! - **Nodes**: [`File`], [`Member`] (a [`Scope`] or an opaque
//!   [`Declaration`]), [`ImportDirective`], wrapped by [`SyntaxNode`].
//! - **Trivia**: [`Trivia`] carries whitespace, line breaks and comments.
//! - **Identity**: every node has a [`NodeId`] assigned by [`TreeBuilder`].
//! - **Replacement**: [`File::replace_member`] returns a new tree with one
//!   member substituted; trees are never mutated in place.
//! - **Code Generation**: convert a tree back to source with [`Codegen`].
//! - **Traversal**: [`Visitor`] and [`walk_file`], plus [`ImportCollector`].
//!
//! # Quick Start
//!
//! ```
//! use tugtool_hoist_cst::{Codegen, TreeBuilder};
//!
//! let mut tree = TreeBuilder::new();
//! let file = tree.file().leading("// header\n");
//! let scope = tree.scope("namespace", "App");
//! let import = tree.import("System").leading("    ").build().unwrap();
//! let decl = tree.declaration("class C {}").leading("    ").build().unwrap();
//! let scope = scope.import(import).member(decl).build().unwrap();
//! let file = file.member(scope).build().unwrap();
//!
//! assert_eq!(
//!     file.to_source(),
//!     "// header\nnamespace App\n{\n    using System;\n    class C {}\n}\n"
//! );
//! ```

// ============================================================================
// Public modules and re-exports
// ============================================================================

mod builder;
pub use builder::{DeclarationBuilder, FileBuilder, ImportBuilder, ScopeBuilder, TreeBuilder};

mod error;
pub use error::{CstError, Result};

mod nodes;
pub use nodes::*;

/// Visitor infrastructure for CST traversal.
pub mod visitor;
pub use visitor::{walk_file, ImportCollector, ImportInfo, VisitResult, Visitor};
