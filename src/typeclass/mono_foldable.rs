//! MonoFoldable type class - folding over monomorphic containers.
//!
//! A *monomorphic* container fixes its element type in the container type
//! itself: a byte buffer always yields `u8`, text always yields `char`.
//! This module provides the [`MonoFoldable`] trait, which associates each
//! such container with its element type and exposes a complete family of
//! folds over it, and the built-in adaptations for generic sequences
//! ([`Sequenced`]), byte buffers ([`bytes::Bytes`]), text ([`String`]),
//! contiguous vectors ([`Vec`]), and unboxed vectors
//! ([`smallvec::SmallVec`]).
//!
//! # Minimal complete definition
//!
//! An implementer supplies **either** [`fold_map`](MonoFoldable::fold_map)
//! **or** [`fold_right`](MonoFoldable::fold_right); every other operation
//! has a default derived from whichever one is supplied. The two defaults
//! are written in terms of each other, so supplying neither recurses
//! forever. The derivations run on the [`Endo`]/[`Dual`] composition
//! monoids: each element becomes a function-composition step, the monoid
//! accumulation stacks the steps in the wanted order, and applying the
//! stack to the seed evaluates the fold. Containers with faster native
//! primitives are expected to override the defaults, as every built-in
//! adaptation here does.
//!
//! # Laws
//!
//! For all containers `c`, seeds `z`, and element-to-monoid functions `f`:
//!
//! ```text
//! c.fold_map(f) == c.fold_right(M::empty(), |e, acc| f(e).combine(acc))
//! c.fold_left_strict(g, z) == c.fold_left(g, z)   // value-identical
//! ```
//!
//! and `fold_left` visits elements in the reverse order of `fold_right`.
//!
//! # Examples
//!
//! ```rust
//! use monofold::typeclass::MonoFoldable;
//!
//! // The same fold algorithm over different container shapes.
//! let sum = vec![1, 2, 3, 4, 5].fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let spelled = String::from("abc").fold_right(String::new(), |character, mut accumulator| {
//!     accumulator.insert(0, character);
//!     accumulator
//! });
//! assert_eq!(spelled, "abc");
//! ```

use std::cell::RefCell;
use std::error::Error;
use std::fmt;

use bytes::Bytes;
use smallvec::{Array, SmallVec};

use super::monoid::Monoid;
use super::wrappers::{Dual, Endo};

/// Continuation used by the strict-fold derivations.
type Step<'a, B> = Box<dyn FnOnce(B) -> B + 'a>;

/// Continuations used by the effectful-fold derivations.
type OptionStep<'a, B> = Box<dyn FnOnce(B) -> Option<B> + 'a>;
type ResultStep<'a, B, E> = Box<dyn FnOnce(B) -> Result<B, E> + 'a>;
type OptionThunk<'a> = Box<dyn FnOnce() -> Option<()> + 'a>;
type ResultThunk<'a, E> = Box<dyn FnOnce() -> Result<(), E> + 'a>;

// =============================================================================
// EmptyStructureError
// =============================================================================

/// Error returned by the no-seed folds on a container with zero elements.
///
/// [`fold_left1`](MonoFoldable::fold_left1) and
/// [`fold_right1`](MonoFoldable::fold_right1) have no accumulator to start
/// from, so they are undefined on empty input. The failure is surfaced as a
/// `Result` so empty and one-element inputs stay distinguishable: a
/// one-element container returns `Ok(element)` without ever invoking the
/// combining function.
///
/// # Examples
///
/// ```rust
/// use monofold::typeclass::{EmptyStructureError, MonoFoldable};
///
/// let empty: Vec<i32> = vec![];
/// assert_eq!(empty.fold_left1(|left, right| left + right), Err(EmptyStructureError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStructureError;

impl fmt::Display for EmptyStructureError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("no-seed fold applied to an empty structure")
    }
}

impl Error for EmptyStructureError {}

// =============================================================================
// MonoFoldable Trait
// =============================================================================

/// A type class for containers whose fixed element type can be folded to a
/// summary value.
///
/// Unlike a fold over a polymorphic collection, the element type here is an
/// associated type: it is determined by the container type, not chosen by
/// the caller. This lets byte buffers, text values, and specialized vectors
/// share one fold vocabulary while each delegates to its own tuned native
/// iteration primitives.
///
/// Folding never mutates the source container (every operation consumes its
/// receiver by value and only reads it) and allocates nothing beyond what
/// the caller's combining function allocates, except in the generic
/// continuation-chaining defaults.
///
/// # Minimal complete definition
///
/// `fold_map` *or* `fold_right`. See the [module docs](self) for how the
/// remaining defaults are derived.
///
/// # Examples
///
/// Implementing for a custom container by supplying only `fold_right`:
///
/// ```rust
/// use monofold::typeclass::MonoFoldable;
///
/// struct Pair(u8, u8);
///
/// impl MonoFoldable for Pair {
///     type Element = u8;
///
///     fn fold_right<B, F>(self, init: B, mut function: F) -> B
///     where
///         F: FnMut(u8, B) -> B,
///     {
///         let folded = function(self.1, init);
///         function(self.0, folded)
///     }
/// }
///
/// // Everything else is derived.
/// let digits = Pair(2, 3);
/// let number = digits.fold_left(1, |accumulator, element| {
///     accumulator * 10 + i32::from(element)
/// });
/// assert_eq!(number, 123);
/// ```
pub trait MonoFoldable {
    /// The element type, fixed by the container type.
    type Element;

    /// Maps every element into a monoid and combines the results
    /// left-to-right.
    ///
    /// This is the most general primitive: every other fold is derivable
    /// from it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monofold::typeclass::{Max, MonoFoldable};
    ///
    /// let tallest: Max<u32> = vec![3u32, 9, 4].fold_map(Max);
    /// assert_eq!(tallest, Max(9));
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        Self: Sized,
        M: Monoid,
        F: FnMut(Self::Element) -> M,
    {
        self.fold_right(M::empty(), |element, accumulator| {
            let mapped = function(element);
            mapped.combine(accumulator)
        })
    }

    /// Folds the container from the right: `f(e1, f(e2, ... f(en, init)))`.
    ///
    /// The default derivation maps each element to an [`Endo`] step and
    /// applies the stacked composition to the seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monofold::typeclass::MonoFoldable;
    ///
    /// // f(1, f(2, f(3, 0))) = 1 - (2 - (3 - 0)) = 2
    /// let result = vec![1, 2, 3].fold_right(0, |element, accumulator| element - accumulator);
    /// assert_eq!(result, 2);
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(Self::Element, B) -> B,
    {
        let function = RefCell::new(function);
        let function = &function;
        let chain: Endo<'_, B> = self.fold_map(move |element| {
            Endo::new(move |accumulator| (&mut *function.borrow_mut())(element, accumulator))
        });
        chain.apply(init)
    }

    /// Folds the container from the left: `f(f(f(init, e1), e2), e3)`.
    ///
    /// The default derivation wraps each element's partial application in
    /// [`Endo`] under [`Dual`], which reverses the composition order, then
    /// applies the stack to the seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monofold::typeclass::MonoFoldable;
    ///
    /// // ((0 - 1) - 2) - 3 = -6
    /// let result = vec![1, 2, 3].fold_left(0, |accumulator, element| accumulator - element);
    /// assert_eq!(result, -6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Element) -> B,
    {
        let function = RefCell::new(function);
        let function = &function;
        let chain: Dual<Endo<'_, B>> = self.fold_map(move |element| {
            Dual::new(Endo::new(move |accumulator| {
                (&mut *function.borrow_mut())(accumulator, element)
            }))
        });
        chain.into_inner().apply(init)
    }

    /// Left fold with every intermediate accumulator fully evaluated,
    /// bounding auxiliary space to O(1) for containers with native
    /// iteration.
    ///
    /// Rust evaluates strictly, so this never differs from
    /// [`fold_left`](MonoFoldable::fold_left) in its result, only in how
    /// the derivation orders evaluation. The default builds a continuation
    /// chain through `fold_right` so each step's accumulator is computed
    /// before the next step runs, left to right; overrides forward to
    /// native constant-space loops.
    fn fold_left_strict<B, F>(self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Element) -> B,
    {
        let function = RefCell::new(function);
        let function = &function;
        let identity: Step<'_, B> = Box::new(|accumulator| accumulator);
        let run = self.fold_right(identity, move |element, rest| {
            let next: Step<'_, B> = Box::new(move |accumulator| {
                let forced = (&mut *function.borrow_mut())(accumulator, element);
                rest(forced)
            });
            next
        });
        run(init)
    }

    /// Right fold with every intermediate accumulator fully evaluated.
    ///
    /// The symmetric derivation of
    /// [`fold_left_strict`](MonoFoldable::fold_left_strict): a continuation
    /// chain built through `fold_left`, evaluated right to left.
    fn fold_right_strict<B, F>(self, init: B, function: F) -> B
    where
        Self: Sized,
        F: FnMut(Self::Element, B) -> B,
    {
        let function = RefCell::new(function);
        let function = &function;
        let identity: Step<'_, B> = Box::new(|accumulator| accumulator);
        let run = self.fold_left(identity, move |rest, element| {
            let next: Step<'_, B> = Box::new(move |accumulator| {
                let forced = (&mut *function.borrow_mut())(element, accumulator);
                rest(forced)
            });
            next
        });
        run(init)
    }

    /// Left fold without a seed, using the first element as the initial
    /// accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the container has zero elements.
    /// On a one-element container the element is returned unchanged and
    /// `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monofold::typeclass::MonoFoldable;
    ///
    /// assert_eq!(vec![4, 2, 8].fold_left1(|left, right| left.min(right)), Ok(2));
    /// ```
    fn fold_left1<F>(self, mut function: F) -> Result<Self::Element, EmptyStructureError>
    where
        Self: Sized,
        F: FnMut(Self::Element, Self::Element) -> Self::Element,
    {
        self.fold_left(None, |carried, element| match carried {
            Some(accumulated) => Some(function(accumulated, element)),
            None => Some(element),
        })
        .ok_or(EmptyStructureError)
    }

    /// Right fold without a seed, using the last element as the initial
    /// accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the container has zero elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monofold::typeclass::MonoFoldable;
    ///
    /// let spelled = String::from("hello").fold_right1(|left, right| left.max(right));
    /// assert_eq!(spelled, Ok('o'));
    /// ```
    fn fold_right1<F>(self, mut function: F) -> Result<Self::Element, EmptyStructureError>
    where
        Self: Sized,
        F: FnMut(Self::Element, Self::Element) -> Self::Element,
    {
        self.fold_right(None, |element, carried| match carried {
            Some(accumulated) => Some(function(element, accumulated)),
            None => Some(element),
        })
        .ok_or(EmptyStructureError)
    }

    /// Effectful left fold over the `Option` effect.
    ///
    /// Threads the accumulator through each step left to right and
    /// short-circuits to `None` on the first failing step; steps after the
    /// failure are never invoked. The default derivation builds a
    /// continuation chain through `fold_right` so effects still execute in
    /// left-to-right element order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monofold::typeclass::MonoFoldable;
    ///
    /// let total = vec![1u8, 2, 3].fold_left_option(0u8, |accumulator, element| {
    ///     accumulator.checked_add(element)
    /// });
    /// assert_eq!(total, Some(6));
    /// ```
    fn fold_left_option<B, F>(self, init: B, function: F) -> Option<B>
    where
        Self: Sized,
        F: FnMut(B, Self::Element) -> Option<B>,
    {
        let function = RefCell::new(function);
        let function = &function;
        let finish: OptionStep<'_, B> = Box::new(Some);
        let run = self.fold_right(finish, move |element, rest| {
            let next: OptionStep<'_, B> = Box::new(move |accumulator| {
                let stepped = (&mut *function.borrow_mut())(accumulator, element);
                stepped.and_then(rest)
            });
            next
        });
        run(init)
    }

    /// Effectful left fold over the `Result` effect.
    ///
    /// The `Result` twin of
    /// [`fold_left_option`](MonoFoldable::fold_left_option): the first
    /// `Err` step aborts the fold and becomes the overall result.
    ///
    /// # Errors
    ///
    /// Propagates the first error produced by `function`.
    fn fold_left_result<B, E, F>(self, init: B, function: F) -> Result<B, E>
    where
        Self: Sized,
        F: FnMut(B, Self::Element) -> Result<B, E>,
    {
        let function = RefCell::new(function);
        let function = &function;
        let finish: ResultStep<'_, B, E> = Box::new(Ok);
        let run = self.fold_right(finish, move |element, rest| {
            let next: ResultStep<'_, B, E> = Box::new(move |accumulator| {
                let stepped = (&mut *function.borrow_mut())(accumulator, element);
                stepped.and_then(rest)
            });
            next
        });
        run(init)
    }

    /// Applies an effectful function to every element purely for its
    /// effects, discarding each per-element result.
    ///
    /// Effects are sequenced strictly left to right; the first `None`
    /// stops the traversal. The default derivation chains each element's
    /// effect before the rest of the traversal via `fold_right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monofold::typeclass::MonoFoldable;
    ///
    /// let mut seen = Vec::new();
    /// let outcome = vec![1, 2, 3].for_each_option(|element| {
    ///     seen.push(element);
    ///     Some(())
    /// });
    /// assert_eq!(outcome, Some(()));
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    fn for_each_option<B, F>(self, function: F) -> Option<()>
    where
        Self: Sized,
        F: FnMut(Self::Element) -> Option<B>,
    {
        let function = RefCell::new(function);
        let function = &function;
        let done: OptionThunk<'_> = Box::new(|| Some(()));
        let run = self.fold_right(done, move |element, rest| {
            let next: OptionThunk<'_> = Box::new(move || {
                let effect = (&mut *function.borrow_mut())(element);
                effect?;
                rest()
            });
            next
        });
        run()
    }

    /// The `Result` twin of
    /// [`for_each_option`](MonoFoldable::for_each_option).
    ///
    /// # Errors
    ///
    /// Propagates the first error produced by `function`; later elements
    /// are not visited.
    fn for_each_result<B, E, F>(self, function: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Element) -> Result<B, E>,
    {
        let function = RefCell::new(function);
        let function = &function;
        let done: ResultThunk<'_, E> = Box::new(|| Ok(()));
        let run = self.fold_right(done, move |element, rest| {
            let next: ResultThunk<'_, E> = Box::new(move || {
                let effect = (&mut *function.borrow_mut())(element);
                effect?;
                rest()
            });
            next
        });
        run()
    }
}

// =============================================================================
// Sequenced<I> Implementation (generic sequences)
// =============================================================================

/// Adapts any double-ended iterable into a [`MonoFoldable`].
///
/// This is the bridge for containers that already carry Rust's
/// general-purpose sequence-folding capability: anything implementing
/// [`IntoIterator`] with a [`DoubleEndedIterator`] (needed so the right
/// folds can forward to [`DoubleEndedIterator::rfold`] without buffering).
/// Every operation forwards directly to the native iterator primitives; no
/// custom logic.
///
/// # Examples
///
/// ```rust
/// use monofold::typeclass::{MonoFoldable, Sequenced};
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
/// let total = Sequenced(set).fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(total, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequenced<I>(pub I);

impl<I> Sequenced<I> {
    /// Wraps an iterable container.
    #[inline]
    pub const fn new(container: I) -> Self {
        Self(container)
    }

    /// Consumes the wrapper and returns the container.
    #[inline]
    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<I> From<I> for Sequenced<I> {
    fn from(container: I) -> Self {
        Self::new(container)
    }
}

impl<I> MonoFoldable for Sequenced<I>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
{
    type Element = I::Item;

    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(I::Item) -> M,
    {
        self.0.into_iter().fold(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(I::Item, B) -> B,
    {
        self.0
            .into_iter()
            .rfold(init, |accumulator, element| function(element, accumulator))
    }

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.0.into_iter().fold(init, function)
    }

    fn fold_left_strict<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.0.into_iter().fold(init, function)
    }

    fn fold_right_strict<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(I::Item, B) -> B,
    {
        self.0
            .into_iter()
            .rfold(init, |accumulator, element| function(element, accumulator))
    }

    fn fold_left1<F>(self, function: F) -> Result<I::Item, EmptyStructureError>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        self.0.into_iter().reduce(function).ok_or(EmptyStructureError)
    }

    fn fold_right1<F>(self, mut function: F) -> Result<I::Item, EmptyStructureError>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        self.0
            .into_iter()
            .rev()
            .reduce(|accumulated, element| function(element, accumulated))
            .ok_or(EmptyStructureError)
    }

    fn fold_left_option<B, F>(self, init: B, function: F) -> Option<B>
    where
        F: FnMut(B, I::Item) -> Option<B>,
    {
        self.0.into_iter().try_fold(init, function)
    }

    fn fold_left_result<B, E, F>(self, init: B, function: F) -> Result<B, E>
    where
        F: FnMut(B, I::Item) -> Result<B, E>,
    {
        self.0.into_iter().try_fold(init, function)
    }

    fn for_each_option<B, F>(self, mut function: F) -> Option<()>
    where
        F: FnMut(I::Item) -> Option<B>,
    {
        self.0
            .into_iter()
            .try_for_each(|element| function(element).map(|_| ()))
    }

    fn for_each_result<B, E, F>(self, mut function: F) -> Result<(), E>
    where
        F: FnMut(I::Item) -> Result<B, E>,
    {
        self.0
            .into_iter()
            .try_for_each(|element| function(element).map(|_| ()))
    }
}

// =============================================================================
// Bytes Implementation (byte buffers)
// =============================================================================

/// Byte buffers always yield `u8`. The folds walk the underlying
/// contiguous slice. The derived continuation chains nest one call frame
/// per element, which a bulk buffer cannot afford, so the effectful left
/// folds forward to `try_fold` and the per-byte traversals are
/// hand-written indexed walks; only `fold_map` stays on its default,
/// which routes through the overridden `fold_right`.
impl MonoFoldable for Bytes {
    type Element = u8;

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(u8, B) -> B,
    {
        self.iter()
            .copied()
            .rfold(init, |accumulator, byte| function(byte, accumulator))
    }

    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, u8) -> B,
    {
        self.iter()
            .copied()
            .fold(init, |accumulator, byte| function(accumulator, byte))
    }

    fn fold_left_strict<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, u8) -> B,
    {
        self.iter()
            .copied()
            .fold(init, |accumulator, byte| function(accumulator, byte))
    }

    fn fold_right_strict<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(u8, B) -> B,
    {
        self.iter()
            .copied()
            .rfold(init, |accumulator, byte| function(byte, accumulator))
    }

    fn fold_left1<F>(self, function: F) -> Result<u8, EmptyStructureError>
    where
        F: FnMut(u8, u8) -> u8,
    {
        self.iter().copied().reduce(function).ok_or(EmptyStructureError)
    }

    fn fold_right1<F>(self, mut function: F) -> Result<u8, EmptyStructureError>
    where
        F: FnMut(u8, u8) -> u8,
    {
        self.iter()
            .copied()
            .rev()
            .reduce(|accumulated, byte| function(byte, accumulated))
            .ok_or(EmptyStructureError)
    }

    fn fold_left_option<B, F>(self, init: B, function: F) -> Option<B>
    where
        F: FnMut(B, u8) -> Option<B>,
    {
        self.iter().copied().try_fold(init, function)
    }

    fn fold_left_result<B, E, F>(self, init: B, function: F) -> Result<B, E>
    where
        F: FnMut(B, u8) -> Result<B, E>,
    {
        self.iter().copied().try_fold(init, function)
    }

    /// Hand-written traversal: one effect per byte, read directly from the
    /// buffer's contiguous memory by index, sequenced strictly before the
    /// index advances. The buffer is only read, never mutated.
    fn for_each_option<B, F>(self, mut function: F) -> Option<()>
    where
        F: FnMut(u8) -> Option<B>,
    {
        let buffer: &[u8] = self.as_ref();
        let length = buffer.len();
        let mut index = 0;
        while index < length {
            function(buffer[index])?;
            index += 1;
        }
        Some(())
    }

    /// The `Result` twin of the hand-written byte traversal.
    fn for_each_result<B, E, F>(self, mut function: F) -> Result<(), E>
    where
        F: FnMut(u8) -> Result<B, E>,
    {
        let buffer: &[u8] = self.as_ref();
        let length = buffer.len();
        let mut index = 0;
        while index < length {
            function(buffer[index])?;
            index += 1;
        }
        Ok(())
    }
}

// =============================================================================
// String Implementation (text)
// =============================================================================

/// Text always yields `char`. The left folds, right fold, and no-seed
/// variants forward to `str::chars`; the strict right fold and the
/// effectful operations fall back to the trait defaults, which route
/// through the overridden folds. Those derived chains nest one call frame
/// per character, so the fallback operations are sized for text, not for
/// bulk data (use the byte-buffer or vector adaptations there).
impl MonoFoldable for String {
    type Element = char;

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(char, B) -> B,
    {
        self.chars()
            .rfold(init, |accumulator, character| function(character, accumulator))
    }

    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, char) -> B,
    {
        self.chars()
            .fold(init, |accumulator, character| function(accumulator, character))
    }

    fn fold_left_strict<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, char) -> B,
    {
        self.chars()
            .fold(init, |accumulator, character| function(accumulator, character))
    }

    fn fold_left1<F>(self, function: F) -> Result<char, EmptyStructureError>
    where
        F: FnMut(char, char) -> char,
    {
        self.chars().reduce(function).ok_or(EmptyStructureError)
    }

    fn fold_right1<F>(self, mut function: F) -> Result<char, EmptyStructureError>
    where
        F: FnMut(char, char) -> char,
    {
        self.chars()
            .rev()
            .reduce(|accumulated, character| function(character, accumulated))
            .ok_or(EmptyStructureError)
    }
}

// =============================================================================
// Vec<T> Implementation (contiguous vectors)
// =============================================================================

/// Contiguous vectors yield their declared element type. Every operation
/// forwards to the native iterator primitives, including `try_fold` and
/// `try_for_each` for the effectful ones.
impl<T> MonoFoldable for Vec<T> {
    type Element = T;

    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(T) -> M,
    {
        self.into_iter().fold(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rfold(init, |accumulator, element| function(element, accumulator))
    }

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_left_strict<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right_strict<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rfold(init, |accumulator, element| function(element, accumulator))
    }

    fn fold_left1<F>(self, function: F) -> Result<T, EmptyStructureError>
    where
        F: FnMut(T, T) -> T,
    {
        self.into_iter().reduce(function).ok_or(EmptyStructureError)
    }

    fn fold_right1<F>(self, mut function: F) -> Result<T, EmptyStructureError>
    where
        F: FnMut(T, T) -> T,
    {
        self.into_iter()
            .rev()
            .reduce(|accumulated, element| function(element, accumulated))
            .ok_or(EmptyStructureError)
    }

    fn fold_left_option<B, F>(self, init: B, function: F) -> Option<B>
    where
        F: FnMut(B, T) -> Option<B>,
    {
        self.into_iter().try_fold(init, function)
    }

    fn fold_left_result<B, E, F>(self, init: B, function: F) -> Result<B, E>
    where
        F: FnMut(B, T) -> Result<B, E>,
    {
        self.into_iter().try_fold(init, function)
    }

    fn for_each_option<B, F>(self, mut function: F) -> Option<()>
    where
        F: FnMut(T) -> Option<B>,
    {
        self.into_iter()
            .try_for_each(|element| function(element).map(|_| ()))
    }

    fn for_each_result<B, E, F>(self, mut function: F) -> Result<(), E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        self.into_iter()
            .try_for_each(|element| function(element).map(|_| ()))
    }
}

// =============================================================================
// SmallVec<A> Implementation (unboxed vectors)
// =============================================================================

/// Inline vectors yield their declared element type, constrained to `Copy`
/// elements so the storage stays a dense, boxing-free layout. Every
/// operation mirrors the `Vec` forwarding.
impl<A> MonoFoldable for SmallVec<A>
where
    A: Array,
    A::Item: Copy,
{
    type Element = A::Item;

    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(A::Item) -> M,
    {
        self.into_iter().fold(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A::Item, B) -> B,
    {
        self.into_iter()
            .rfold(init, |accumulator, element| function(element, accumulator))
    }

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A::Item) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_left_strict<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A::Item) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right_strict<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A::Item, B) -> B,
    {
        self.into_iter()
            .rfold(init, |accumulator, element| function(element, accumulator))
    }

    fn fold_left1<F>(self, function: F) -> Result<A::Item, EmptyStructureError>
    where
        F: FnMut(A::Item, A::Item) -> A::Item,
    {
        self.into_iter().reduce(function).ok_or(EmptyStructureError)
    }

    fn fold_right1<F>(self, mut function: F) -> Result<A::Item, EmptyStructureError>
    where
        F: FnMut(A::Item, A::Item) -> A::Item,
    {
        self.into_iter()
            .rev()
            .reduce(|accumulated, element| function(element, accumulated))
            .ok_or(EmptyStructureError)
    }

    fn fold_left_option<B, F>(self, init: B, function: F) -> Option<B>
    where
        F: FnMut(B, A::Item) -> Option<B>,
    {
        self.into_iter().try_fold(init, function)
    }

    fn fold_left_result<B, E, F>(self, init: B, function: F) -> Result<B, E>
    where
        F: FnMut(B, A::Item) -> Result<B, E>,
    {
        self.into_iter().try_fold(init, function)
    }

    fn for_each_option<B, F>(self, mut function: F) -> Option<()>
    where
        F: FnMut(A::Item) -> Option<B>,
    {
        self.into_iter()
            .try_for_each(|element| function(element).map(|_| ()))
    }

    fn for_each_result<B, E, F>(self, mut function: F) -> Result<(), E>
    where
        F: FnMut(A::Item) -> Result<B, E>,
    {
        self.into_iter()
            .try_for_each(|element| function(element).map(|_| ()))
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property-Based Tests
// =============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::typeclass::{Semigroup, Sum};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_fold_map_consistent_with_fold_right(
            values in prop::collection::vec(-1000i32..1000, 0..50)
        ) {
            let by_map: Sum<i64> = values.clone().fold_map(|element| Sum(i64::from(element)));
            let by_right = values.fold_right(Sum(0i64), |element, accumulator| {
                Sum(i64::from(element)).combine(accumulator)
            });
            prop_assert_eq!(by_map, by_right);
        }

        #[test]
        fn prop_fold_left_visits_reverse_of_fold_right(
            values in prop::collection::vec(any::<i32>(), 0..50)
        ) {
            let left_order = values.clone().fold_left(Vec::new(), |mut accumulator, element| {
                accumulator.push(element);
                accumulator
            });
            let mut right_order = values.fold_right(Vec::new(), |element, mut accumulator| {
                accumulator.push(element);
                accumulator
            });
            right_order.reverse();
            prop_assert_eq!(left_order, right_order);
        }

        #[test]
        fn prop_strict_folds_match_lazy_folds(
            values in prop::collection::vec(any::<i32>(), 0..50)
        ) {
            let lazy = values.clone().fold_left(0i64, |accumulator, element| {
                accumulator.wrapping_add(i64::from(element))
            });
            let strict = values.fold_left_strict(0i64, |accumulator, element| {
                accumulator.wrapping_add(i64::from(element))
            });
            prop_assert_eq!(lazy, strict);
        }

        #[test]
        fn prop_fold_left1_matches_seeded_fold_on_non_empty(
            head in any::<i32>(),
            tail in prop::collection::vec(any::<i32>(), 0..20)
        ) {
            let mut values = vec![head];
            values.extend_from_slice(&tail);

            let no_seed = values.clone().fold_left1(|accumulated, element| {
                accumulated.wrapping_add(element)
            });
            let seeded = tail.fold_left(head, |accumulated, element| {
                accumulated.wrapping_add(element)
            });
            prop_assert_eq!(no_seed, Ok(seeded));
        }

        #[test]
        fn prop_bytes_for_each_logs_every_byte(values in prop::collection::vec(any::<u8>(), 0..64)) {
            let buffer = Bytes::from(values.clone());
            let mut log = Vec::new();
            let outcome = buffer.for_each_option(|byte| {
                log.push(byte);
                Some(())
            });
            prop_assert_eq!(outcome, Some(()));
            prop_assert_eq!(log, values);
        }

        #[test]
        fn prop_string_fold_left_matches_char_iteration(text in "[a-z]{0,20}") {
            let by_fold = text.clone().fold_left(Vec::new(), |mut accumulator, character| {
                accumulator.push(character);
                accumulator
            });
            let by_chars: Vec<char> = text.chars().collect();
            prop_assert_eq!(by_fold, by_chars);
        }
    }
}
