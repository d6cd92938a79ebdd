// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

mod file;
mod import;
mod scope;
mod traits;
mod trivia;

pub use file::{File, SyntaxNode};
pub use import::{Alias, ImportDirective};
pub use scope::{Declaration, Member, Scope};
pub use traits::{Codegen, CodegenState, NodeId, NodeIdGenerator};
pub use trivia::{Newline, Trivia, TriviaPiece};
