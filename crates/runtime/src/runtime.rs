use crate::{CallContext, Error, ErrorKind, Module, RValue, Result, Returns, core_lib::CoreLib, prelude::*};
use std::fmt;

/// The trait used by the abort reporting mechanism
///
/// See [RuntimeSettings::abort_callback].
pub trait AbortCallback: Fn(&Error) + RookSend + RookSync {}

// Implement the trait for any matching function
impl<T> AbortCallback for T where T: Fn(&Error) + RookSend + RookSync {}

/// The configurable settings that should be used by the Rook runtime
pub struct RuntimeSettings {
    /// An optional callback that is called whenever a builtin fails
    ///
    /// The callback receives the error (including the name of the failing builtin) before it is
    /// returned from [Runtime::call], which gives hosts a single place to report or log aborts.
    pub abort_callback: Option<Box<dyn AbortCallback>>,

    /// The largest capacity that `vector_reserve` will allocate
    ///
    /// Larger requests fail with a range error instead of attempting the allocation.
    pub max_reserve_capacity: usize,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            abort_callback: None,
            max_reserve_capacity: 1 << 24,
        }
    }
}

impl fmt::Debug for RuntimeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeSettings")
            .field("abort_callback", &self.abort_callback.is_some())
            .field("max_reserve_capacity", &self.max_reserve_capacity)
            .finish()
    }
}

/// Dispatches calls to builtins by name
///
/// The runtime's prelude starts out with the core library, hosts can add further modules with
/// [Runtime::prelude_mut].
pub struct Runtime {
    settings: RuntimeSettings,
    prelude: Module,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::with_settings(RuntimeSettings::default())
    }
}

impl Runtime {
    /// Initializes a runtime with the given settings
    pub fn with_settings(settings: RuntimeSettings) -> Self {
        Self {
            settings,
            prelude: CoreLib::default().prelude(),
        }
    }

    /// The runtime's settings
    pub fn settings(&self) -> &RuntimeSettings {
        &self.settings
    }

    /// The builtins that can be called by name
    pub fn prelude(&self) -> &Module {
        &self.prelude
    }

    /// Mutable access to the prelude, e.g. for registering additional modules
    pub fn prelude_mut(&mut self) -> &mut Module {
        &mut self.prelude
    }

    /// Calls the builtin with the given name
    ///
    /// The builtin takes ownership of the arguments. On failure the error is tagged with the
    /// builtin's name and passed to the abort callback before being returned.
    pub fn call(&self, name: &str, args: impl Into<Vec<RValue>>) -> Result<Returns> {
        let result = match self.prelude.get(name) {
            Some(f) => {
                let mut ctx = CallContext::new(&self.settings, args.into());
                f.call(&mut ctx).map_err(|error| error.with_builtin(name))
            }
            None => runtime_error!(ErrorKind::UnknownBuiltin(name.into())),
        };

        if let (Err(error), Some(callback)) = (&result, &self.settings.abort_callback) {
            callback(error);
        }

        result
    }
}
