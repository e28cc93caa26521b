//! Caller-supplied uniqueness checks

/// Decides whether a candidate is unique in the caller's context
///
/// The answer for a given candidate must not change while a generator is
/// retrying, and the check must terminate. Any `Fn(&T) -> bool` is a predicate.
pub trait UniquenessPredicate<T: ?Sized> {
    /// `true` if `candidate` is, or would be, unique in this context
    fn is_unique(&self, candidate: &T) -> bool;
}

impl<T: ?Sized, F> UniquenessPredicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn is_unique(&self, candidate: &T) -> bool {
        self(candidate)
    }
}

/// Predicate that accepts every candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<T: ?Sized> UniquenessPredicate<T> for AcceptAll {
    fn is_unique(&self, _candidate: &T) -> bool {
        true
    }
}
