use crate::{Borrow, BorrowMut, PtrMut, RString, RValue, Result, lazy, prelude::*};
use rook_memory::Address;
use std::fmt;

/// A trait for host-provided objects that can be passed around as [RValue::Resource] values
///
/// The runtime treats resources as opaque, only their type name and identity are visible to
/// builtins. Resources that can be driven by the coroutine builtins should also implement
/// [Coroutine], and expose it via [RookResource::as_coroutine].
///
/// ## Example
///
/// ```
/// use rook_runtime::prelude::*;
///
/// struct FileHandle;
///
/// impl RookResource for FileHandle {
///     fn type_name(&self) -> &str {
///         "FileHandle"
///     }
/// }
///
/// let value = RValue::from(RResource::new(FileHandle));
/// assert_eq!(value.type_as_string(), "FileHandle");
/// ```
pub trait RookResource: RookSend + RookSync + 'static {
    /// The resource's type, as shown in error messages and by `type_as_string`
    fn type_name(&self) -> &str;

    /// Returns the resource as a coroutine, if it is one
    fn as_coroutine(&self) -> Option<&dyn Coroutine> {
        None
    }

    /// Returns the resource as a mutable coroutine, if it is one
    fn as_coroutine_mut(&mut self) -> Option<&mut dyn Coroutine> {
        None
    }
}

/// The interface used by the coroutine builtins to talk to the host's scheduler
///
/// Suspension and resumption are implemented by the host, the runtime only forwards calls.
pub trait Coroutine {
    /// True while the coroutine can still be resumed
    fn is_active(&self) -> bool;

    /// The value most recently yielded or returned by the coroutine
    fn return_value(&self) -> RValue;

    /// Resumes the coroutine, passing `value` in as the result of its last yield
    fn resume(&mut self, value: RValue) -> Result<()>;
}

/// A shared handle to a [RookResource]
#[derive(Clone)]
pub struct RResource(PtrMut<dyn RookResource>);

impl RResource {
    /// Wraps a resource in a new handle
    pub fn new(resource: impl RookResource) -> Self {
        Self(make_ptr_mut!(resource))
    }

    /// The resource's type name
    ///
    /// While the resource is being modified its name can't be read, and `"Resource"` is returned.
    pub fn type_name(&self) -> RString {
        match self.0.try_borrow() {
            Ok(resource) => resource.type_name().into(),
            Err(_) => lazy!(RString; "Resource"),
        }
    }

    /// Returns a shared borrow of the resource
    ///
    /// Panics (or blocks with the `arc` feature) if the resource is being modified,
    /// see [RResource::try_borrow].
    pub fn borrow(&self) -> Borrow<'_, dyn RookResource> {
        self.0.borrow()
    }

    /// Returns a shared borrow of the resource, or an error if it's being modified
    pub fn try_borrow(&self) -> Result<Borrow<'_, dyn RookResource>> {
        Ok(self.0.try_borrow()?)
    }

    /// Returns an exclusive borrow of the resource, or an error if it's already borrowed
    pub fn try_borrow_mut(&self) -> Result<BorrowMut<'_, dyn RookResource>> {
        Ok(self.0.try_borrow_mut()?)
    }

    /// The number of owners of the resource
    pub fn ref_count(&self) -> usize {
        PtrMut::ref_count(&self.0)
    }

    /// Returns true if both handles refer to the same resource
    pub fn ptr_eq(&self, other: &Self) -> bool {
        PtrMut::ptr_eq(&self.0, &other.0)
    }

    /// The address of the resource's allocation
    pub fn address(&self) -> Address {
        PtrMut::address(&self.0)
    }
}

impl fmt::Debug for RResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.type_name(), self.address())
    }
}
