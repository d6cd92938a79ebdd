//! Import hoisting rule for tugtool.
//!
//! This crate provides a single syntax rule that moves import directives
//! declared inside top-level namespace scopes out to file scope, preserving
//! comments, blank lines and indentation, and never changing what a name
//! binds to:
//!
//! - Directives keep their order; earlier scopes' directives come first and
//!   land after any directives already at file scope.
//! - Any aliased directive in a scope being processed makes the whole file a
//!   no-op, since its meaning may depend on the enclosing scope.
//! - The rule is idempotent.
//!
//! # Usage
//!
//! ```
//! use tugtool_hoist::{transform, HoistConfig, Hoister, LineEnding};
//! use tugtool_hoist_cst::{Codegen, SyntaxNode, TreeBuilder};
//!
//! let mut tree = TreeBuilder::new();
//! let file = tree.file().leading("// header\n");
//! let scope = tree.scope("namespace", "App");
//! let import = tree.import("System").leading("    ").build().unwrap();
//! let decl = tree.declaration("class C {}").leading("    ").build().unwrap();
//! let scope = scope.import(import).member(decl).build().unwrap();
//! let file = file.member(scope).build().unwrap();
//!
//! let hoister = Hoister::new(HoistConfig::default().with_line_ending(LineEnding::Lf));
//! let out = hoister.transform(SyntaxNode::File(file));
//! assert_eq!(
//!     out.to_source(),
//!     "// header\nusing System;\n\nnamespace App\n{\n    class C {}\n}\n"
//! );
//!
//! // Applying the rule again changes nothing.
//! assert_eq!(transform(out.clone()), out);
//! ```

pub mod config;
pub mod error;
pub mod hoister;
pub mod outcome;
pub mod rule;

pub use config::{HoistConfig, LineEnding};
pub use error::{HoistError, HoistResult};
pub use hoister::Hoister;
pub use outcome::{AliasBlocker, HoistOutcome, HoistReport, HoistedScope};
pub use rule::{RuleOrder, SyntaxRule};

use tugtool_hoist_cst::SyntaxNode;

/// Apply the hoisting rule with default configuration.
pub fn transform(root: SyntaxNode) -> SyntaxNode {
    Hoister::default().transform(root)
}
