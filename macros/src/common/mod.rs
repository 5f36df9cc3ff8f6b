// Common utilities shared by the derive implementations
//
// This module contains:
// - method_attr: `#[typed(Name = path)]` parsing

mod method_attr;

pub use method_attr::*;
