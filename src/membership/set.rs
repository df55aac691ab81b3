use crate::membership::Membership;
use num_traits::PrimInt;
use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::HashSet;
use std::fmt::{Debug, Formatter};
use std::hash::{BuildHasher, Hash};

impl<T, Q, H> Membership<Q> for HashSet<T, H>
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    H: BuildHasher,
{
    fn contains(&self, needle: &Q) -> bool {
        HashSet::<T, H>::contains(self, needle)
    }
}

/// Owned copy of the distinct elements of a haystack.
#[derive(Clone)]
pub struct SetLookup<T, H = RandomState> {
    items: HashSet<T, H>,
}

impl<T> SetLookup<T>
where
    T: Eq + Hash,
{
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::with_hasher(items, RandomState::new())
    }
}

impl<T, H> SetLookup<T, H>
where
    T: Eq + Hash,
    H: BuildHasher,
{
    pub fn with_hasher<I: IntoIterator<Item = T>>(items: I, build_hasher: H) -> Self {
        let mut set = HashSet::with_hasher(build_hasher);
        set.extend(items);
        log::trace!("built lookup set with {} distinct items", set.len());
        Self { items: set }
    }
}

impl<T, H> SetLookup<T, H> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_inner(self) -> HashSet<T, H> {
        self.items
    }
}

impl<T, Q, H> Membership<Q> for SetLookup<T, H>
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    H: BuildHasher,
{
    fn contains(&self, needle: &Q) -> bool {
        self.items.contains(needle)
    }
}

impl<T: Eq + Hash> FromIterator<T> for SetLookup<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T, H> Debug for SetLookup<T, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SetLookup {{ len: {} }}", self.items.len())
    }
}

pub fn set_lookup_int<I>(haystack: &[I]) -> impl Fn(I) -> bool + 'static
where
    I: PrimInt + Hash + 'static,
{
    let lookup = SetLookup::new(haystack.iter().copied());
    move |needle: I| lookup.contains(&needle)
}

pub fn set_lookup_str<S: AsRef<str>>(haystack: &[S]) -> impl Fn(&str) -> bool + 'static {
    owned_str_lookup(
        haystack
            .iter()
            .map(|item| item.as_ref().to_owned())
            .collect(),
    )
}

// Not generic, so the closure does not carry the caller's element type.
fn owned_str_lookup(lookup: SetLookup<String>) -> impl Fn(&str) -> bool {
    move |needle: &str| lookup.contains(needle)
}

pub fn set_contains_int<I>(haystack: &[I], needle: I) -> bool
where
    I: PrimInt + Hash,
{
    SetLookup::new(haystack.iter().copied()).contains(&needle)
}

pub fn set_contains_str<S: AsRef<str>>(haystack: &[S], needle: &str) -> bool {
    SetLookup::new(haystack.iter().map(AsRef::<str>::as_ref)).contains(needle)
}
