//! Send and Sync bounds that follow the memory management strategy
//!
//! With the `rc` feature, values can't leave their thread, so [RookSend] and [RookSync] are empty
//! traits implemented for all types. With `arc` they are aliases of [Send] and [Sync].

#[cfg(feature = "rc")]
mod traits {
    /// An empty trait for single-threaded runtimes, implemented for all types
    pub trait RookSend {}
    impl<T: ?Sized> RookSend for T {}

    /// An empty trait for single-threaded runtimes, implemented for all types
    pub trait RookSync {}
    impl<T: ?Sized> RookSync for T {}
}

#[cfg(not(feature = "rc"))]
mod traits {
    pub use Send as RookSend;
    pub use Sync as RookSync;
}

pub use traits::*;
