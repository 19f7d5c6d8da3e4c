use crate::{Address, __private::Shared};
use std::{cmp::Ordering, ops::Deref};

/// Returns a shared value that's created on first use
///
/// The value has type `$ty` and is created with `$expr.into()`. Later uses return a new owner of
/// the same value, which makes the macro useful for strings that are handed out repeatedly, like
/// type names.
///
/// With the `rc` feature the value is cached per thread, with `arc` it's cached per process.
///
/// ```
/// use rook_memory::{Ptr, lazy};
///
/// fn type_name() -> Ptr<[u8]> {
///     lazy!(Ptr<[u8]>; b"Vector".to_vec())
/// }
///
/// assert!(Ptr::ptr_eq(&type_name(), &type_name()));
/// ```
#[cfg(feature = "rc")]
#[macro_export]
macro_rules! lazy {
    ($ty:ty; $expr:expr) => {{
        thread_local! {
            static CACHED: $ty = $expr.into();
        }
        CACHED.with(Clone::clone)
    }};
}

/// Returns a shared value that's created on first use, see the `rc` variant for details
#[cfg(feature = "arc")]
#[macro_export]
macro_rules! lazy {
    ($ty:ty; $expr:expr) => {{
        static CACHED: ::std::sync::LazyLock<$ty> = ::std::sync::LazyLock::new(|| $expr.into());
        ::std::sync::LazyLock::force(&CACHED).clone()
    }};
}

/// Makes a [Ptr] from a value, allowing the pointer to be coerced to a trait object
///
/// The coercion has to happen on the inner pointer, e.g. `Ptr<dyn RookFunction>` is made with
/// `make_ptr!(function)`.
#[macro_export]
macro_rules! make_ptr {
    ($value:expr) => {
        $crate::Ptr::from(
            $crate::__private::Shared::new($value) as $crate::__private::Shared<_>
        )
    };
}

/// A reference counted pointer to an immutable heap object
#[derive(Debug, Default)]
pub struct Ptr<T: ?Sized>(Shared<T>);

impl<T: ?Sized> Ptr<T> {
    /// Returns true if both pointers refer to the same allocation
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Shared::ptr_eq(&this.0, &other.0)
    }

    /// The address of the allocation, for identity checks that outlive a borrow
    pub fn address(this: &Self) -> Address {
        Shared::as_ptr(&this.0).into()
    }

    /// The number of owners of the allocation
    pub fn ref_count(this: &Self) -> usize {
        Shared::strong_count(&this.0)
    }
}

impl<T> From<T> for Ptr<T> {
    fn from(value: T) -> Self {
        Self(Shared::new(value))
    }
}

impl<T: ?Sized> From<Shared<T>> for Ptr<T> {
    fn from(shared: Shared<T>) -> Self {
        Self(shared)
    }
}

impl<T: Clone> From<&[T]> for Ptr<[T]> {
    fn from(values: &[T]) -> Self {
        Self(values.into())
    }
}

impl<T> From<Vec<T>> for Ptr<[T]> {
    fn from(values: Vec<T>) -> Self {
        Self(values.into())
    }
}

impl<T: ?Sized> Clone for Ptr<T> {
    fn clone(&self) -> Self {
        Self(Shared::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Ptr<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Ptr<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: ?Sized + Eq> Eq for Ptr<T> {}

impl<T: ?Sized + PartialOrd> PartialOrd for Ptr<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: ?Sized + Ord> Ord for Ptr<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}
