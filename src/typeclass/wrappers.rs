//! Wrapper types carrying the algebraic operations used by folds.
//!
//! The numeric newtypes let the same underlying type participate in
//! different `Semigroup`/`Monoid` instances: integers can be combined by
//! addition ([`Sum`]), multiplication ([`Product`]), or comparison
//! ([`Max`], [`Min`]).
//!
//! The remaining two wrappers are the derivation devices of this crate:
//!
//! - [`Endo`]: a function from a type to itself, combined by composition.
//! - [`Dual`]: a semigroup with the argument order of `combine` reversed.
//!
//! Together they let a right fold, a left fold, and every strict or
//! effectful variant be expressed through a single monoid-accumulation
//! primitive: each element becomes a partial application wrapped in
//! `Endo`, the monoid combine stacks the applications in the wanted
//! order (`Dual` flips it), and applying the stacked composition to the
//! seed evaluates the fold.

use std::fmt;

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A newtype wrapper that represents the additive semigroup/monoid.
///
/// `Sum(a).combine(Sum(b))` equals `Sum(a + b)`; the identity element is
/// `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use monofold::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// A newtype wrapper that represents the multiplicative semigroup/monoid.
///
/// `Product(a).combine(Product(b))` equals `Product(a * b)`; the identity
/// element is `Product(1)`.
///
/// # Examples
///
/// ```rust
/// use monofold::typeclass::{Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// Default is deliberately not derived: the multiplicative identity is 1,
// not the numeric default 0. See the Monoid instances.

// =============================================================================
// Max Wrapper
// =============================================================================

/// A newtype wrapper that represents the maximum semigroup.
///
/// `Max(a).combine(Max(b))` equals `Max(max(a, b))`. With a [`Bounded`]
/// inner type it is a monoid whose identity is `Max(A::MIN_VALUE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

impl<A> Max<A> {
    /// Creates a new `Max` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Max` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Max<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Min Wrapper
// =============================================================================

/// A newtype wrapper that represents the minimum semigroup.
///
/// `Min(a).combine(Min(b))` equals `Min(min(a, b))`. With a [`Bounded`]
/// inner type it is a monoid whose identity is `Min(A::MAX_VALUE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<A>(pub A);

impl<A> Min<A> {
    /// Creates a new `Min` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Min` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Min<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Bounded Trait
// =============================================================================

/// A trait for types that have minimum and maximum bounds.
///
/// Supplies the identity elements for `Max` and `Min` monoids:
///
/// - `Max<A>` uses `A::MIN_VALUE` as its identity
/// - `Min<A>` uses `A::MAX_VALUE` as its identity
///
/// # Implementing Bounded
///
/// ```rust
/// use monofold::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
///
/// assert_eq!(Score::MIN_VALUE.0, 0);
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_primitive {
    ($($type:ty),* $(,)?) => {
        $(
            impl Bounded for $type {
                const MIN_VALUE: Self = <$type>::MIN;
                const MAX_VALUE: Self = <$type>::MAX;
            }
        )*
    };
}

bounded_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for f32 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for f64 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = Self::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

// =============================================================================
// Endo Wrapper
// =============================================================================

/// An endomorphism: a function from a type to itself, combined by
/// composition.
///
/// `Endo(f).combine(Endo(g))` applies `g` first and `f` second, and the
/// identity element is the identity function. This is the encoding the
/// default fold derivations use: each element of a container contributes
/// one `Endo` step, the monoid accumulation stacks the steps, and
/// [`apply`](Endo::apply) runs the stack against the fold's seed.
///
/// The lifetime parameter bounds whatever the wrapped closure borrows;
/// for owned closures it is free.
///
/// # Examples
///
/// ```rust
/// use monofold::typeclass::{Endo, Semigroup};
///
/// let add_one = Endo::new(|value: i32| value + 1);
/// let double = Endo::new(|value: i32| value * 2);
///
/// // Composition applies the right-hand side first: (10 * 2) + 1.
/// assert_eq!(add_one.combine(double).apply(10), 21);
/// ```
pub struct Endo<'a, A>(Box<dyn FnOnce(A) -> A + 'a>);

impl<'a, A> Endo<'a, A> {
    /// Wraps a function from `A` to `A`.
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(A) -> A + 'a,
    {
        Self(Box::new(function))
    }

    /// The identity endomorphism.
    pub fn identity() -> Self {
        Self(Box::new(|value| value))
    }

    /// Applies the wrapped function, consuming the endomorphism.
    pub fn apply(self, value: A) -> A {
        (self.0)(value)
    }
}

impl<A> fmt::Debug for Endo<'_, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Endo").finish_non_exhaustive()
    }
}

// =============================================================================
// Dual Wrapper
// =============================================================================

/// A wrapper that reverses the argument order of the inner semigroup's
/// `combine`.
///
/// `Dual(a).combine(Dual(b))` equals `Dual(b.combine(a))`. Combined with
/// [`Endo`] this turns the left-to-right accumulation of a monoid fold
/// into right-to-left composition, which is exactly how a left fold is
/// derived from a monoid-accumulation primitive.
///
/// # Examples
///
/// ```rust
/// use monofold::typeclass::{Dual, Semigroup};
///
/// let flipped = Dual(String::from("a")).combine(Dual(String::from("b")));
/// assert_eq!(flipped, Dual(String::from("ba")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dual<A>(pub A);

impl<A> Dual<A> {
    /// Creates a new `Dual` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Dual` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Dual<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Monoid, Semigroup};
    use rstest::rstest;

    #[rstest]
    fn sum_new_and_into_inner() {
        assert_eq!(Sum::new(42).into_inner(), 42);
    }

    #[rstest]
    fn product_new_and_into_inner() {
        assert_eq!(Product::new(42).into_inner(), 42);
    }

    #[rstest]
    fn max_new_and_into_inner() {
        assert_eq!(Max::new(42).into_inner(), 42);
    }

    #[rstest]
    fn min_new_and_into_inner() {
        assert_eq!(Min::new(42).into_inner(), 42);
    }

    #[rstest]
    fn bounded_integer_extremes() {
        assert_eq!(i32::MIN_VALUE, i32::MIN);
        assert_eq!(u8::MAX_VALUE, u8::MAX);
    }

    #[rstest]
    fn bounded_char_extremes() {
        assert_eq!(char::MIN_VALUE, '\0');
        assert_eq!(char::MAX_VALUE, char::MAX);
    }

    #[rstest]
    fn endo_identity_returns_input() {
        assert_eq!(Endo::identity().apply(7), 7);
    }

    #[rstest]
    fn endo_combine_applies_right_then_left() {
        let subtract_three = Endo::new(|value: i32| value - 3);
        let halve = Endo::new(|value: i32| value / 2);

        // (20 / 2) - 3, not (20 - 3) / 2
        assert_eq!(subtract_three.combine(halve).apply(20), 7);
    }

    #[rstest]
    fn endo_empty_is_identity() {
        let composed = Endo::<i32>::empty().combine(Endo::new(|value| value + 1));
        assert_eq!(composed.apply(1), 2);
    }

    #[rstest]
    fn dual_reverses_combine_order() {
        let forward = String::from("a").combine(String::from("b"));
        let reversed = Dual(String::from("a")).combine(Dual(String::from("b")));

        assert_eq!(forward, "ab");
        assert_eq!(reversed.into_inner(), "ba");
    }

    #[rstest]
    fn dual_empty_wraps_inner_identity() {
        assert_eq!(Dual::<String>::empty(), Dual(String::new()));
    }
}
