//! # monofold
//!
//! Uniform folds over *monomorphic* containers.
//!
//! A monomorphic container is one whose element type is fixed by the
//! container type itself: a byte buffer always yields bytes, a text value
//! always yields characters. Rust's standard folding vocabulary lives on
//! [`Iterator`], which works well for polymorphic collections but gives
//! byte buffers, text, and specialized vectors no common capability trait
//! that names their element type. This crate provides exactly that:
//! [`MonoFoldable`](typeclass::MonoFoldable), a trait associating each
//! container with its fixed element type and exposing a complete family of
//! folds (monoid accumulation, left/right folds, strict variants, no-seed
//! variants, and effectful folds), with every operation derivable from a
//! single supplied primitive.
//!
//! ## Overview
//!
//! - **Type Classes**: `MonoFoldable`, plus the `Semigroup`/`Monoid`
//!   algebra its monoid-accumulation fold consumes
//! - **Derivation devices**: `Endo` and `Dual` wrappers that express every
//!   fold shape as function composition under a monoid
//! - **Built-in adaptations**: generic sequences (`Sequenced`), byte
//!   buffers (`bytes::Bytes`), text (`String`), contiguous vectors
//!   (`Vec<T>`), and unboxed vectors (`smallvec::SmallVec`)
//!
//! ## Example
//!
//! ```rust
//! use monofold::prelude::*;
//!
//! // One fold algorithm, three container shapes.
//! let total = vec![1, 2, 3].fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(total, 6);
//!
//! let biggest = String::from("hello").fold_right1(|left, right| left.max(right));
//! assert_eq!(biggest, Ok('o'));
//!
//! let bytes = bytes::Bytes::from_static(b"abc");
//! let count = bytes.fold_left(0usize, |accumulator, _byte| accumulator + 1);
//! assert_eq!(count, 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monofold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::typeclass::*;
}

pub mod typeclass;
