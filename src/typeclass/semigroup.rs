//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monofold::typeclass::Semigroup;
//!
//! // String concatenation
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! // Vec concatenation
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Dual, Endo, Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use monofold::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty. For a version that returns
    /// the identity element for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monofold::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(words), Some(String::from("ab")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// Option combines inner values when both sides are present.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(left), None) => Some(left),
            (None, right) => right,
        }
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

/// Sum combines by addition.
impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Product combines by multiplication.
impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

/// Max keeps the larger value.
impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

/// Min keeps the smaller value.
impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

// =============================================================================
// Derivation Device Implementations
// =============================================================================

/// Endomorphisms combine by composition: the right-hand side is applied
/// first, the left-hand side second. The composed closure captures both
/// sides, so the value type must outlive the composition.
impl<'a, A: 'a> Semigroup for Endo<'a, A> {
    fn combine(self, other: Self) -> Self {
        Self::new(move |value| self.apply(other.apply(value)))
    }
}

/// Dual reverses the combine order of the wrapped semigroup.
impl<A: Semigroup> Semigroup for Dual<A> {
    fn combine(self, other: Self) -> Self {
        Self(other.0.combine(self.0))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        let result = String::from("Hello, ").combine(String::from("World!"));
        assert_eq!(result, "Hello, World!");
    }

    #[rstest]
    fn string_combine_is_associative() {
        let (a, b, c) = (String::from("x"), String::from("y"), String::from("z"));
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[rstest]
    fn vec_combine_appends() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    }

    #[rstest]
    fn option_combine_both_present() {
        let result = Some(String::from("a")).combine(Some(String::from("b")));
        assert_eq!(result, Some(String::from("ab")));
    }

    #[rstest]
    fn option_combine_with_none() {
        let value = Some(String::from("a"));
        assert_eq!(value.clone().combine(None), value);
        assert_eq!(None.combine(value.clone()), value);
    }

    #[rstest]
    fn unit_combine_is_trivial() {
        assert_eq!(().combine(()), ());
    }

    #[rstest]
    fn sum_combine_adds() {
        assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
    }

    #[rstest]
    fn product_combine_multiplies() {
        assert_eq!(Product(3).combine(Product(5)), Product(15));
    }

    #[rstest]
    fn max_combine_keeps_larger() {
        assert_eq!(Max(3).combine(Max(5)), Max(5));
        assert_eq!(Max(5).combine(Max(3)), Max(5));
    }

    #[rstest]
    fn min_combine_keeps_smaller() {
        assert_eq!(Min(3).combine(Min(5)), Min(3));
        assert_eq!(Min(5).combine(Min(3)), Min(3));
    }

    #[rstest]
    fn endo_combine_composes_right_to_left() {
        let append_a = Endo::new(|mut text: String| {
            text.push('a');
            text
        });
        let append_b = Endo::new(|mut text: String| {
            text.push('b');
            text
        });

        // append_b runs first, append_a second
        let result = append_a.combine(append_b).apply(String::new());
        assert_eq!(result, "ba");
    }

    #[rstest]
    fn endo_combine_supports_borrowed_value_types() {
        let text = String::from("seed");
        let trim_start = Endo::new(|value: &str| value.trim_start());
        let trim_end = Endo::new(|value: &str| value.trim_end());

        let trimmed = trim_start.combine(trim_end).apply(&text);
        assert_eq!(trimmed, "seed");
    }

    #[rstest]
    fn dual_combine_swaps_arguments() {
        let result = Dual(vec![1]).combine(Dual(vec![2]));
        assert_eq!(result, Dual(vec![2, 1]));
    }

    #[rstest]
    fn reduce_all_non_empty() {
        let sums = vec![Sum(1), Sum(2), Sum(3)];
        assert_eq!(Sum::reduce_all(sums), Some(Sum(6)));
    }

    #[rstest]
    fn reduce_all_empty_returns_none() {
        let empty: Vec<Sum<i32>> = vec![];
        assert_eq!(Sum::reduce_all(empty), None);
    }
}
