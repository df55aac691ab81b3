use crate::membership::Membership;
use num_traits::PrimInt;
use std::borrow::Borrow;
use std::fmt::{Debug, Formatter};

#[derive(Clone, Copy)]
pub struct SortedLookup<'a, T> {
    items: &'a [T],
}

impl<'a, T: Ord> SortedLookup<'a, T> {
    /// Sorts `items` in place.
    pub fn new(items: &'a mut [T]) -> Self {
        log::trace!("sorting {} items for binary search", items.len());
        items.sort_unstable();
        Self { items }
    }

    /// Returns `None` if `items` is not in ascending order.
    pub fn from_sorted(items: &'a [T]) -> Option<Self> {
        items
            .windows(2)
            .all(|pair| pair[0] <= pair[1])
            .then_some(Self { items })
    }
}

impl<'a, T> SortedLookup<'a, T> {
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T, Q> Membership<Q> for SortedLookup<'_, T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    fn contains(&self, needle: &Q) -> bool {
        self.items
            .binary_search_by(|probe| probe.borrow().cmp(needle))
            .is_ok()
    }
}

impl<T> Debug for SortedLookup<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SortedLookup {{ len: {} }}", self.items.len())
    }
}

pub fn sorted_lookup_int<I: PrimInt>(haystack: &mut [I]) -> impl Fn(I) -> bool + '_ {
    let lookup = SortedLookup::new(haystack);
    move |needle: I| lookup.contains(&needle)
}

pub fn sorted_lookup_str<S>(haystack: &mut [S]) -> impl Fn(&str) -> bool + '_
where
    S: Borrow<str> + Ord,
{
    let lookup = SortedLookup::new(haystack);
    move |needle: &str| lookup.contains(needle)
}

pub fn sorted_contains_int<I: PrimInt>(haystack: &mut [I], needle: I) -> bool {
    SortedLookup::new(haystack).contains(&needle)
}

pub fn sorted_contains_str<S>(haystack: &mut [S], needle: &str) -> bool
where
    S: Borrow<str> + Ord,
{
    SortedLookup::new(haystack).contains(needle)
}
