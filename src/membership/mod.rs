pub mod dynamic;
pub mod linear;
pub mod set;
pub mod sorted;

pub trait Membership<Q: ?Sized> {
    fn contains(&self, needle: &Q) -> bool;
}
