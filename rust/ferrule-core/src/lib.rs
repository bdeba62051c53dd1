//! Ferrule Core
//!
//! The utility operations shared by both native library variants. Everything
//! here is plain safe Rust; the C ABI lives in the `ferrule-demo` and
//! `ferrule-analysis` shim crates, and host-side loading lives in
//! `ferrule-host`.

pub mod arith;
pub mod numeric;
pub mod sizes;
pub mod text;

pub use arith::increment;
pub use numeric::{erf, random_unit, sqroot};
pub use sizes::TypeSizes;
pub use text::describe_to;
