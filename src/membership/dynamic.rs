use crate::error::{Error, Result};
use crate::value::Value;

pub fn contains(haystack: &Value, needle: &Value) -> Result<bool> {
    match haystack.as_sequence() {
        Some(items) => Ok(items.iter().any(|item| item == needle)),
        None => {
            log::debug!("rejecting {} haystack", haystack.kind());
            Err(Error::UnsupportedHaystackType {
                kind: haystack.kind(),
            })
        }
    }
}
