//! The `rook` core library module

use crate::{ErrorKind, prelude::*};

/// Initializes the `rook` core library module
pub fn make_module() -> Module {
    use RValue::{Int, Str, Vector};

    let mut result = Module::new();

    result.add_fn("length", |ctx| {
        let expected_error = "|Int|, |String|, or |Vector|";

        match ctx.take_args::<1>(expected_error)? {
            [Int(n)] => Ok(n.into()),
            [Str(s)] => Ok(RValue::from(s.len()).into()),
            [Vector(v)] => Ok(RValue::from(v.try_data()?.len()).into()),
            [other] => type_error(expected_error, &other),
        }
    });

    result.add_fn("equal", |ctx| {
        let [a, b] = ctx.take_args::<2>("|Any, Any|")?;
        Ok(a.deep_eq(&b)?.into())
    });

    result.add_fn("assert", |ctx| {
        let expected_error = "|Any|";

        match ctx.take_args::<1>(expected_error)? {
            [condition] if condition.is_truthy() => Ok(().into()),
            _ => runtime_error!(ErrorKind::AssertionFailed),
        }
    });

    result
}
