//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Typed)]` | on struct/enum/union | Reflection registration |

mod typed;

pub use typed::expand_derive_typed;
