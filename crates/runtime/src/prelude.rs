//! A collection of useful items to make it easier to work with `rook_runtime`

#[doc(inline)]
pub use crate::{
    CallContext, Coroutine, ElementKind, Module, RNativeFunction, RResource, RString, RValue,
    RVector, Returns, RookFunction, RookResource, RookSend, RookSync, Runtime, RuntimeSettings,
    ValueKind, ValueVec, make_ptr, make_ptr_mut, runtime_error, type_error, unexpected_args,
};
