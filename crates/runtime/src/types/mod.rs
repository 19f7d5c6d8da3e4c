//! The core types used in the Rook runtime

mod module;
mod native_function;
mod resource;
mod string;
pub mod value;
mod vector;

pub use self::{
    module::Module,
    native_function::{CallContext, RNativeFunction, Returns, RookFunction},
    resource::{Coroutine, RResource, RookResource},
    string::RString,
    value::{RValue, ValueKind},
    vector::{ElementKind, RVector, ValueVec, VectorData},
};

use std::ops::Range;

/// Resolves a `start`/`size` pair against a container of length `len`
///
/// Negative values are offsets from `len`, and are resolved before the bounds are checked.
/// Returns `None` if the resolved range doesn't fit in the container.
pub(crate) fn resolve_range(len: usize, start: i64, size: i64) -> Option<Range<usize>> {
    let len = i64::try_from(len).ok()?;
    let start = if start < 0 { start.checked_add(len)? } else { start };
    let size = if size < 0 { size.checked_add(len)? } else { size };
    let end = start.checked_add(size)?;

    if start < 0 || size < 0 || end > len {
        return None;
    }

    Some(usize::try_from(start).ok()?..usize::try_from(end).ok()?)
}
