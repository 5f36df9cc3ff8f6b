//! Procedural macros for tola-equaller
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Typed)]` | struct/enum/union | Register a type and its methods for reflection |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Typed)]
//! #[typed(Equal = Point::equal)]
//! struct Point { id: u32 }
//!
//! impl Point {
//!     fn equal(&self, other: &Point) -> bool { self.id == other.id }
//! }
//! ```
//!
//! Each `Name = path` pair in `#[typed(...)]` registers the function at
//! `path` under `Name`. The attribute may repeat.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros
// =============================================================================

/// Derive `Typed`, registering the methods listed in `#[typed(...)]`.
#[proc_macro_derive(Typed, attributes(typed))]
pub fn derive_typed(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_typed(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
