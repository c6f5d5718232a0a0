//! Monoid type class - semigroups with an identity element.
//!
//! A type `T` is a monoid if it has:
//!
//! 1. An associative binary operation `combine: (T, T) -> T` (from Semigroup)
//! 2. An identity element `empty: T` such that for all `a`:
//!    - `empty.combine(a) == a` (left identity)
//!    - `a.combine(empty) == a` (right identity)
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monofold::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Dual, Endo, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// This is the algebra [`MonoFoldable::fold_map`](super::MonoFoldable::fold_map)
/// accumulates into: the identity element seeds the accumulation and the
/// associative combine merges per-element results.
///
/// # Laws
///
/// In addition to the Semigroup laws, for all `a`:
///
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use monofold::typeclass::{Monoid, Semigroup};
///
/// let value = String::from("hello");
/// assert_eq!(String::empty().combine(value.clone()), value);
/// assert_eq!(value.clone().combine(String::empty()), value);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity
    /// element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monofold::typeclass::{Monoid, Sum};
    ///
    /// let sums = vec![Sum(1), Sum(2), Sum(3)];
    /// assert_eq!(Sum::combine_all(sums), Sum(6));
    ///
    /// let empty: Vec<Sum<i32>> = vec![];
    /// assert_eq!(Sum::combine_all(empty), Sum(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// Option forms a monoid when its inner type is a semigroup.
/// The identity element is `None`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// The unit type forms a trivial monoid with `()` as the identity.
impl Monoid for () {
    fn empty() -> Self {}
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

/// Sum forms a monoid under addition with 0 as the identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

// Product identities are listed per type: Default would give 0, not the
// multiplicative identity.
macro_rules! product_identity {
    ($($type:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$type> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_identity! {
    i8 => 1,
    i16 => 1,
    i32 => 1,
    i64 => 1,
    i128 => 1,
    isize => 1,
    u8 => 1,
    u16 => 1,
    u32 => 1,
    u64 => 1,
    u128 => 1,
    usize => 1,
    f32 => 1.0,
    f64 => 1.0,
}

/// Max forms a monoid with the minimum bound as the identity.
impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

/// Min forms a monoid with the maximum bound as the identity.
impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

// =============================================================================
// Derivation Device Implementations
// =============================================================================

/// The identity function is the identity of composition.
impl<'a, A: 'a> Monoid for Endo<'a, A> {
    fn empty() -> Self {
        Self::identity()
    }
}

/// Dual inherits the identity of the wrapped monoid.
impl<A: Monoid> Monoid for Dual<A> {
    fn empty() -> Self {
        Self(A::empty())
    }
}

// =============================================================================
// Tests
// =============================================================================
