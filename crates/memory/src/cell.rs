use crate::Ptr;
use std::{
    error, fmt,
    ops::{Deref, DerefMut},
};

#[cfg(feature = "rc")]
mod backend {
    use std::cell::{Ref, RefCell, RefMut};

    pub type Cell<T> = RefCell<T>;
    pub type Shared<'a, T> = Ref<'a, T>;
    pub type Exclusive<'a, T> = RefMut<'a, T>;

    pub fn shared<T: ?Sized>(cell: &Cell<T>) -> Shared<'_, T> {
        cell.borrow()
    }

    pub fn exclusive<T: ?Sized>(cell: &Cell<T>) -> Exclusive<'_, T> {
        cell.borrow_mut()
    }

    pub fn try_shared<T: ?Sized>(cell: &Cell<T>) -> Option<Shared<'_, T>> {
        cell.try_borrow().ok()
    }

    pub fn try_exclusive<T: ?Sized>(cell: &Cell<T>) -> Option<Exclusive<'_, T>> {
        cell.try_borrow_mut().ok()
    }
}

#[cfg(feature = "arc")]
mod backend {
    use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

    pub type Cell<T> = RwLock<T>;
    pub type Shared<'a, T> = RwLockReadGuard<'a, T>;
    pub type Exclusive<'a, T> = RwLockWriteGuard<'a, T>;

    pub fn shared<T: ?Sized>(cell: &Cell<T>) -> Shared<'_, T> {
        cell.read()
    }

    pub fn exclusive<T: ?Sized>(cell: &Cell<T>) -> Exclusive<'_, T> {
        cell.write()
    }

    pub fn try_shared<T: ?Sized>(cell: &Cell<T>) -> Option<Shared<'_, T>> {
        cell.try_read()
    }

    pub fn try_exclusive<T: ?Sized>(cell: &Cell<T>) -> Option<Exclusive<'_, T>> {
        cell.try_write()
    }
}

/// Makes a [PtrMut] from a value, allowing the pointer to be coerced to a trait object
#[macro_export]
macro_rules! make_ptr_mut {
    ($value:expr) => {
        $crate::make_ptr!($crate::RCell::from($value))
    };
}

/// A shared pointer to a value that can be changed through an exclusive borrow
pub type PtrMut<T> = Ptr<RCell<T>>;

impl<T> From<T> for PtrMut<T> {
    fn from(value: T) -> Self {
        Ptr::from(RCell::from(value))
    }
}

/// The reason that a borrow of an [RCell] couldn't be taken
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorrowError {
    /// A shared borrow was requested while the value is exclusively borrowed
    ExclusivelyBorrowed,
    /// An exclusive borrow was requested while other borrows are active
    Borrowed,
}

impl fmt::Display for BorrowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExclusivelyBorrowed => f.write_str("the value is being modified"),
            Self::Borrowed => f.write_str("the value is in use"),
        }
    }
}

impl error::Error for BorrowError {}

/// A value with borrow rules that are checked at runtime
///
/// Any number of shared borrows can be active at once, an exclusive borrow needs the value to
/// be otherwise unborrowed.
///
/// The blocking borrows ([RCell::borrow], [RCell::borrow_mut]) panic on a conflict with the `rc`
/// feature, and wait for the conflicting borrow to end with `arc`. Code that can't rule out a
/// conflict should use the `try_` versions.
#[derive(Debug, Default)]
pub struct RCell<T: ?Sized>(backend::Cell<T>);

impl<T> From<T> for RCell<T> {
    fn from(value: T) -> Self {
        Self(backend::Cell::new(value))
    }
}

impl<T: ?Sized> RCell<T> {
    /// Borrows the value for reading
    pub fn borrow(&self) -> Borrow<'_, T> {
        Borrow(backend::shared(&self.0))
    }

    /// Borrows the value for writing
    pub fn borrow_mut(&self) -> BorrowMut<'_, T> {
        BorrowMut(backend::exclusive(&self.0))
    }

    /// Borrows the value for reading, failing if it's exclusively borrowed
    pub fn try_borrow(&self) -> Result<Borrow<'_, T>, BorrowError> {
        backend::try_shared(&self.0)
            .map(Borrow)
            .ok_or(BorrowError::ExclusivelyBorrowed)
    }

    /// Borrows the value for writing, failing if any other borrow is active
    pub fn try_borrow_mut(&self) -> Result<BorrowMut<'_, T>, BorrowError> {
        backend::try_exclusive(&self.0)
            .map(BorrowMut)
            .ok_or(BorrowError::Borrowed)
    }
}

/// A shared borrow of the value in an [RCell]
pub struct Borrow<'a, T: ?Sized>(backend::Shared<'a, T>);

impl<T: ?Sized> Deref for Borrow<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// An exclusive borrow of the value in an [RCell]
///
/// While it's alive nothing else can read or write the value.
pub struct BorrowMut<'a, T: ?Sized>(backend::Exclusive<'a, T>);

impl<T: ?Sized> Deref for BorrowMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> DerefMut for BorrowMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_borrows_are_reported() {
        let value = PtrMut::from(vec![1, 2, 3]);

        let shared = value.try_borrow().unwrap();
        assert_eq!(value.try_borrow().map(|v| v.len()), Ok(3));
        assert_eq!(value.try_borrow_mut().err(), Some(BorrowError::Borrowed));
        drop(shared);

        let mut exclusive = value.try_borrow_mut().unwrap();
        exclusive.push(4);
        assert_eq!(value.try_borrow().err(), Some(BorrowError::ExclusivelyBorrowed));
        drop(exclusive);

        assert_eq!(*value.borrow(), [1, 2, 3, 4]);
    }

    #[test]
    fn owners_share_the_cell() {
        let a = PtrMut::from(String::from("a"));
        let b = a.clone();
        b.borrow_mut().push('b');
        assert_eq!(a.borrow().as_str(), "ab");
        assert_eq!(PtrMut::ref_count(&a), 2);
    }
}
