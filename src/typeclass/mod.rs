//! Type class traits for folding over monomorphic containers.
//!
//! This module provides the crate's single core abstraction and the small
//! algebra it consumes:
//!
//! - [`MonoFoldable`]: folding over containers whose element type is fixed
//!   by the container type itself
//! - [`Semigroup`]: associative binary operations
//! - [`Monoid`]: semigroup with identity element
//!
//! ## Foundation Types
//!
//! - [`Sequenced`]: adapts any double-ended iterable into a [`MonoFoldable`]
//! - [`Sum`], [`Product`]: numeric wrappers for different monoid operations
//! - [`Max`], [`Min`]: bounded numeric wrappers
//! - [`Bounded`]: trait for types with minimum and maximum values
//! - [`Endo`], [`Dual`]: the function-composition monoids the default fold
//!   derivations are written in
//! - [`EmptyStructureError`]: failure value of the no-seed folds
//!
//! # Examples
//!
//! ## Folding with a monoid
//!
//! ```rust
//! use monofold::typeclass::{MonoFoldable, Sum};
//!
//! let total: Sum<i32> = vec![1, 2, 3, 4].fold_map(Sum);
//! assert_eq!(total, Sum(10));
//! ```
//!
//! ## Effectful folding
//!
//! ```rust
//! use monofold::typeclass::MonoFoldable;
//!
//! let summed = vec![1, 2, 3].fold_left_option(0i32, |accumulator, element| {
//!     accumulator.checked_add(element)
//! });
//! assert_eq!(summed, Some(6));
//! ```

mod mono_foldable;
mod monoid;
mod semigroup;
mod wrappers;

pub use mono_foldable::{EmptyStructureError, MonoFoldable, Sequenced};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Dual, Endo, Max, Min, Product, Sum};
