//! The `coroutine` core library module
//!
//! The builtins forward to the host's [Coroutine] implementation, scheduling is left to the host.

use crate::{RResource, Result, prelude::*};

/// Initializes the `coroutine` core library module
pub fn make_module() -> Module {
    use RValue::Resource;

    let mut result = Module::new();

    result.add_fn("resume", |ctx| {
        let expected_error = "|Coroutine|, or |Coroutine, Any|";

        match ctx.take_args::<2>(expected_error)? {
            [Resource(r), value] => {
                with_coroutine_mut(&r, |co| co.resume(value))?;
                Ok(().into())
            }
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("returnvalue", |ctx| {
        let expected_error = "|Coroutine|";

        match ctx.take_args::<1>(expected_error)? {
            [Resource(r)] => Ok(with_coroutine(&r, |co| co.return_value())?.into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("active", |ctx| {
        let expected_error = "|Coroutine|";

        match ctx.take_args::<1>(expected_error)? {
            [Resource(r)] => Ok(with_coroutine(&r, |co| co.is_active())?.into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result
}

fn with_coroutine<T>(r: &RResource, f: impl FnOnce(&dyn Coroutine) -> T) -> Result<T> {
    let resource = r.try_borrow()?;
    match resource.as_coroutine() {
        Some(co) => Ok(f(co)),
        None => not_a_coroutine(r),
    }
}

fn with_coroutine_mut<T>(
    r: &RResource,
    f: impl FnOnce(&mut dyn Coroutine) -> Result<T>,
) -> Result<T> {
    let mut resource = r.try_borrow_mut()?;
    if let Some(co) = resource.as_coroutine_mut() {
        return f(co);
    }
    // The error message needs the resource's type name, which requires a shared borrow
    drop(resource);
    not_a_coroutine(r)
}

fn not_a_coroutine<T>(r: &RResource) -> Result<T> {
    type_error("a coroutine", &RValue::Resource(r.clone()))
}
