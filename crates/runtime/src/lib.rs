//! The value model, vector engine, and core builtins of the Rook scripting language
//!
//! Builtins receive owned [RValue]s and return owned results. Heap objects ([RString],
//! [RVector], [RResource]) are reference counted, so every exit path of a builtin either moves a
//! value into its result or releases it, which the type system enforces.

#![warn(missing_docs)]

mod error;
mod runtime;
mod send_sync;
mod types;

pub mod core_lib;
pub mod prelude;
pub mod sorted;

pub use crate::{
    error::{Error, ErrorKind, Result, range_error, type_error, unexpected_args},
    runtime::{AbortCallback, Runtime, RuntimeSettings},
    send_sync::{RookSend, RookSync},
    types::{
        CallContext, Coroutine, ElementKind, Module, RNativeFunction, RResource, RString,
        RValue, RVector, Returns, RookFunction, RookResource, ValueKind, ValueVec, VectorData,
    },
};
pub use rook_memory::{Borrow, BorrowMut, Ptr, PtrMut, RCell, lazy, make_ptr, make_ptr_mut};
