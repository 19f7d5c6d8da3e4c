use crate::{ErrorKind, RValue, Result, runtime_error};
use std::cmp::Ordering;

/// Compares two keys
///
/// Both keys must have the same kind. Floats that can't be ordered (i.e. NaN) compare as equal.
/// Vector keys are compared by their first elements, which must themselves be scalar keys.
pub fn compare_keys(a: &RValue, b: &RValue) -> Result<Ordering> {
    compare_keys_at_depth(a, b, false)
}

fn compare_keys_at_depth(a: &RValue, b: &RValue, nested: bool) -> Result<Ordering> {
    use RValue::*;

    match (a, b) {
        (Int(a), Int(b)) => Ok(a.cmp(b)),
        (Float(a), Float(b)) => Ok(a.partial_cmp(b).unwrap_or(Ordering::Equal)),
        (Str(a), Str(b)) => Ok(a.as_bytes().cmp(b.as_bytes())),
        (Vector(a), Vector(b)) if !nested => {
            let a = a.try_data()?;
            let b = b.try_data()?;
            match (a.first(), b.first()) {
                (Some(a), Some(b)) => compare_keys_at_depth(a, b, true),
                _ => illegal_key(if a.is_empty() { "empty vector" } else { "vector" }),
            }
        }
        (Vector(_), Vector(_)) => illegal_key("nested vector"),
        _ if a.kind() != b.kind() => runtime_error!(ErrorKind::TypeMismatch {
            expected: format!("a key matching {}", a.kind()),
            found: b.kind().to_string(),
        }),
        _ => illegal_key(&a.type_as_string().to_string()),
    }
}

fn illegal_key(description: &str) -> Result<Ordering> {
    runtime_error!(ErrorKind::IllegalKeyType(description.into()))
}
