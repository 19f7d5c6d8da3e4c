use crate::{Ptr, RString, RValue, RVector, Result, RuntimeSettings, error::unexpected_args, prelude::*};
use smallvec::SmallVec;
use std::fmt;

/// A trait for native functions that can be registered as builtins
pub trait RookFunction:
    Fn(&mut CallContext) -> Result<Returns> + RookSend + RookSync + 'static
{
}

impl<T> RookFunction for T where
    T: Fn(&mut CallContext) -> Result<Returns> + RookSend + RookSync + 'static
{
}

/// A builtin function, as stored in a [crate::Module]
pub struct RNativeFunction {
    /// The function implementation that should be called when the builtin is invoked
    #[allow(clippy::type_complexity)]
    pub function: Ptr<dyn RookFunction>,
}

impl RNativeFunction {
    /// Creates a new native function
    pub fn new(function: impl RookFunction) -> Self {
        Self {
            function: make_ptr!(function),
        }
    }

    /// Calls the function with the given context
    pub fn call(&self, ctx: &mut CallContext) -> Result<Returns> {
        (self.function)(ctx)
    }
}

impl Clone for RNativeFunction {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
        }
    }
}

impl fmt::Debug for RNativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "native function: {}", Ptr::address(&self.function))
    }
}

/// The context provided when a builtin is called
///
/// The builtin owns its arguments: they can be moved out of the context with
/// [CallContext::take_args], and anything left behind is released when the context is dropped.
pub struct CallContext<'a> {
    /// The settings of the runtime making the call
    pub settings: &'a RuntimeSettings,
    args: Vec<RValue>,
}

impl<'a> CallContext<'a> {
    /// Returns a new context for calling a builtin
    pub fn new(settings: &'a RuntimeSettings, args: Vec<RValue>) -> Self {
        Self { settings, args }
    }

    /// Returns the call's arguments
    pub fn args(&self) -> &[RValue] {
        &self.args
    }

    /// Takes ownership of the call's arguments
    ///
    /// Missing trailing arguments are filled with `Nil`, which is how optional arguments are
    /// represented. Passing more than `N` arguments is an error, with `expected` describing the
    /// builtin's signature.
    pub fn take_args<const N: usize>(&mut self, expected: &str) -> Result<[RValue; N]> {
        if self.args.len() > N {
            return unexpected_args(expected, &self.args);
        }
        let mut args = std::mem::take(&mut self.args).into_iter();
        Ok(std::array::from_fn(|_| args.next().unwrap_or_default()))
    }
}

/// The values returned by a builtin
///
/// Most builtins return a single value, some (e.g. `binarysearch`) return several.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Returns(pub SmallVec<[RValue; 2]>);

impl Returns {
    /// Returns the first returned value, or `Nil` if nothing was returned
    pub fn first(&self) -> RValue {
        self.0.first().cloned().unwrap_or_default()
    }

    /// Consumes the returned values, returning the first one
    pub fn into_first(self) -> RValue {
        self.0.into_iter().next().unwrap_or_default()
    }

    /// Returns the number of returned values
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing was returned
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Deref for Returns {
    type Target = [RValue];

    fn deref(&self) -> &[RValue] {
        &self.0
    }
}

macro_rules! impl_from_single_value {
    ($($type:ty),+ $(,)?) => {
        $(
            impl From<$type> for Returns {
                fn from(value: $type) -> Self {
                    let mut result = SmallVec::new();
                    result.push(value.into());
                    Self(result)
                }
            }
        )+
    };
}

impl_from_single_value!(RValue, (), bool, i64, f64, RString, RVector);

impl From<(RValue, RValue)> for Returns {
    fn from((a, b): (RValue, RValue)) -> Self {
        Self(smallvec::smallvec![a, b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn missing_args_are_nil() {
        let settings = RuntimeSettings::default();
        let mut ctx = CallContext::new(&settings, vec![1.into()]);
        let [a, b] = ctx.take_args::<2>("|Int, Int|").unwrap();
        assert_eq!(a, RValue::Int(1));
        assert_eq!(b, RValue::Nil);
    }

    #[test]
    fn too_many_args() {
        let settings = RuntimeSettings::default();
        let mut ctx = CallContext::new(&settings, vec![1.into(), 2.into()]);
        let error = ctx.take_args::<1>("|Int|").unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::TypeMismatch { .. }));
    }
}
