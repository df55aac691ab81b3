use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("haystack must be a list or array, got {kind}")]
    UnsupportedHaystackType { kind: &'static str },
}
