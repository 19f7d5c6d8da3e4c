//! Shared ownership pointers for the Rook runtime
//!
//! Every heap object in the runtime (strings, vectors, resources) lives behind a [Ptr]. Cloning a
//! `Ptr` adds an owner, and dropping it removes one, freeing the object (and releasing everything
//! it contains) when the last owner goes away.
//!
//! Objects that can change after creation are wrapped in an [RCell], which tracks shared and
//! exclusive borrows at runtime. The fallible `try_` borrows report a [BorrowError] instead of
//! panicking or blocking, so that callers can turn a conflicting borrow into an ordinary error.
//!
//! Cycles are not collected, a host that allows cyclic structures needs to break them before
//! abandoning them.

#![warn(missing_docs)]

#[cfg(all(feature = "arc", feature = "rc"))]
compile_error!("A single memory management feature can be enabled at a time");

#[cfg(not(any(feature = "arc", feature = "rc")))]
compile_error!("Either the `rc` or the `arc` feature needs to be enabled");

mod address;
mod cell;
mod ptr;

pub use crate::{
    address::Address,
    cell::{Borrow, BorrowError, BorrowMut, PtrMut, RCell},
    ptr::Ptr,
};

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "arc")]
    pub use std::sync::Arc as Shared;

    #[cfg(feature = "rc")]
    pub use std::rc::Rc as Shared;
}
