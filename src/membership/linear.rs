use crate::membership::Membership;
use num_traits::PrimInt;
use std::borrow::Borrow;

impl<T, Q> Membership<Q> for [T]
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    fn contains(&self, needle: &Q) -> bool {
        self.iter().any(|item| item.borrow() == needle)
    }
}

pub fn contains_int<I: PrimInt>(haystack: &[I], needle: I) -> bool {
    haystack.iter().any(|&item| item == needle)
}

pub fn contains_str<S: AsRef<str>>(haystack: &[S], needle: &str) -> bool {
    haystack.iter().any(|item| item.as_ref() == needle)
}
