//! The `vector` core library module

use crate::{
    error::range_error,
    prelude::*,
    sorted::search_equal_run,
};

/// Initializes the `vector` core library module
pub fn make_module() -> Module {
    use RValue::{Int, Nil, Vector};

    let mut result = Module::new();

    result.add_fn("append", |ctx| {
        let expected_error = "|Vector, Vector|";

        match ctx.take_args::<2>(expected_error)? {
            [Vector(a), Vector(b)] => Ok(a.append(b)?.into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("vector_reserve", |ctx| {
        let expected_error = "|Int|";

        match ctx.take_args::<1>(expected_error)? {
            [Int(n)] => match usize::try_from(n) {
                Ok(capacity) if capacity <= ctx.settings.max_reserve_capacity => {
                    Ok(RVector::with_capacity(capacity, ElementKind::Any).into())
                }
                _ => range_error("capacity out of range"),
            },
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("push", |ctx| {
        let expected_error = "|Vector, Any|";

        match ctx.take_args::<2>(expected_error)? {
            [Vector(v), value] => {
                v.try_data_mut()?.push(value)?;
                Ok(v.into())
            }
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("pop", |ctx| {
        let expected_error = "|Vector|";

        match ctx.take_args::<1>(expected_error)? {
            [Vector(v)] => Ok(v.try_data_mut()?.pop()?.into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("top", |ctx| {
        let expected_error = "|Vector|";

        match ctx.take_args::<1>(expected_error)? {
            [Vector(v)] => Ok(v.try_data()?.top()?.into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("replace", |ctx| {
        let expected_error = "|Vector, Int, Any|";

        match ctx.take_args::<3>(expected_error)? {
            [Vector(v), Int(index), value] => Ok(v.replace(index, value)?.into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("insert", |ctx| {
        let expected_error = "|Vector, Int, Any|, or |Vector, Int, Any, Int|";

        let (v, index, value, count) = match ctx.take_args::<4>(expected_error)? {
            [Vector(v), Int(index), value, Nil] => (v, index, value, 1),
            [Vector(v), Int(index), value, Int(count)] => (v, index, value, count),
            unexpected => return unexpected_args(expected_error, &unexpected),
        };

        v.try_data_mut()?.insert(value, index, count)?;
        Ok(v.into())
    });

    result.add_fn("remove", |ctx| {
        let expected_error = "|Vector, Int|, or |Vector, Int, Int|";

        let (v, index, count) = match ctx.take_args::<3>(expected_error)? {
            [Vector(v), Int(index), Nil] => (v, index, 1),
            [Vector(v), Int(index), Int(count)] => (v, index, count),
            unexpected => return unexpected_args(expected_error, &unexpected),
        };

        let removed = v.try_data_mut()?.remove(index, count)?;
        Ok(removed.into())
    });

    result.add_fn("removeobj", |ctx| {
        let expected_error = "|Vector, Any|";

        match ctx.take_args::<2>(expected_error)? {
            [Vector(v), target] => Ok(RValue::from(v.remove_all_equal(&target)?).into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("binarysearch", |ctx| {
        let expected_error = "|Vector, Any|";

        match ctx.take_args::<2>(expected_error)? {
            [Vector(v), key] => {
                let found = search_equal_run(&v.try_data()?, &key)?;
                Ok(Returns::from((
                    RValue::from(found.count),
                    RValue::from(found.start),
                )))
            }
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("copy", |ctx| {
        let expected_error = "|Vector|";

        match ctx.take_args::<1>(expected_error)? {
            [Vector(v)] => Ok(v.copy()?.into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("slice", |ctx| {
        let expected_error = "|Vector, Int, Int|";

        match ctx.take_args::<3>(expected_error)? {
            [Vector(v), Int(start), Int(size)] => Ok(v.slice(start, size)?.into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("any", |ctx| {
        let expected_error = "|Vector|";

        match ctx.take_args::<1>(expected_error)? {
            [Vector(v)] => {
                let first_truthy = v.try_data()?.iter().find(|value| value.is_truthy()).cloned();
                Ok(first_truthy.unwrap_or_default().into())
            }
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("all", |ctx| {
        let expected_error = "|Vector|";

        match ctx.take_args::<1>(expected_error)? {
            [Vector(v)] => Ok(v.try_data()?.iter().all(RValue::is_truthy).into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result
}
