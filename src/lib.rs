pub mod error;
pub mod membership;
pub mod value;

pub use error::{Error, Result};
pub use membership::dynamic::{self, contains};
pub use membership::linear::{self, contains_int, contains_str};
pub use membership::set::{
    self, set_contains_int, set_contains_str, set_lookup_int, set_lookup_str, SetLookup,
};
pub use membership::sorted::{
    self, sorted_contains_int, sorted_contains_str, sorted_lookup_int, sorted_lookup_str,
    SortedLookup,
};
pub use membership::Membership;
pub use value::Value;
