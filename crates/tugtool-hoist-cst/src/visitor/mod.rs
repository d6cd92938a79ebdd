// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for CST traversal.
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order** for `visit_*` methods
//! - **Post-order** for `leave_*` methods
//! - Children are visited in source order (directives, then members)

mod dispatch;
mod import;
mod traits;

pub use dispatch::*;
pub use import::{ImportCollector, ImportInfo};
pub use traits::{VisitResult, Visitor};
