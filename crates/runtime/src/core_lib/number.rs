//! The `number` core library module
//!
//! Rounding and conversion builtins accept a scalar or a vector. Vector arguments are transformed
//! element by element into a new vector, with ints accepted wherever floats are expected.

use crate::{Result, prelude::*};
use std::cmp::Ordering;

/// Initializes the `number` core library module
pub fn make_module() -> Module {
    use RValue::{Float, Int, Vector};

    let mut result = Module::new();

    // Float -> Int operations, with vector overloads
    macro_rules! float_to_int_fn {
        ($name:expr, $op:expr) => {
            result.add_fn($name, |ctx| {
                let expected_error = "|Float|, or |Vector|";

                match ctx.take_args::<1>(expected_error)? {
                    [Vector(v)] => Ok(map_floats(v, ElementKind::Int, |x| Int($op(x)))?.into()),
                    [value] => match as_float(&value) {
                        Some(x) => Ok(RValue::Int($op(x)).into()),
                        None => type_error(expected_error, &value),
                    },
                }
            });
        };
    }

    // Float -> Float operations, without vector overloads
    macro_rules! float_fn {
        ($name:expr, $op:expr) => {
            result.add_fn($name, |ctx| {
                let expected_error = "|Float|";

                let [value] = ctx.take_args::<1>(expected_error)?;
                match as_float(&value) {
                    Some(x) => Ok(RValue::Float($op(x)).into()),
                    None => type_error(expected_error, &value),
                }
            });
        };
    }

    macro_rules! bitwise_fn {
        ($name:expr, $op:expr) => {
            result.add_fn($name, |ctx| {
                let expected_error = "|Int, Int|";

                match ctx.take_args::<2>(expected_error)? {
                    [Int(a), Int(b)] => Ok(RValue::Int($op(a, b)).into()),
                    unexpected => unexpected_args(expected_error, &unexpected),
                }
            });
        };
    }

    result.add_fn("abs", |ctx| {
        let expected_error = "|Int|, |Float|, or |Vector|";

        match ctx.take_args::<1>(expected_error)? {
            [Int(n)] => Ok(RValue::Int(n.wrapping_abs()).into()),
            [Float(x)] => Ok(RValue::Float(x.abs()).into()),
            [Vector(v)] => {
                let kind = v.try_data()?.kind();
                let result = v.map_elements(kind, |value| match value {
                    Int(n) => Ok(Int(n.wrapping_abs())),
                    Float(x) => Ok(Float(x.abs())),
                    other => type_error("a numeric vector", other),
                })?;
                Ok(result.into())
            }
            [other] => type_error(expected_error, &other),
        }
    });

    bitwise_fn!("and", |a: i64, b: i64| a & b);

    float_to_int_fn!("ceiling", |x: f64| x.ceil() as i64);

    result.add_fn("clamp", |ctx| {
        let expected_error = "|Int, Int, Int|, or |Float, Float, Float|";

        match ctx.take_args::<3>(expected_error)? {
            [Int(x), Int(min), Int(max)] => Ok(RValue::Int(x.min(max).max(min)).into()),
            [Float(x), Float(min), Float(max)] => Ok(RValue::Float(x.min(max).max(min)).into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("div", |ctx| {
        let expected_error = "|Int, Int|";

        match ctx.take_args::<2>(expected_error)? {
            // A zero divisor gives inf or NaN rather than an error
            [Int(a), Int(b)] => Ok(RValue::Float(a as f64 / b as f64).into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("float", |ctx| {
        let expected_error = "|Int|, or |Vector|";

        match ctx.take_args::<1>(expected_error)? {
            [Int(n)] => Ok(RValue::Float(n as f64).into()),
            [Vector(v)] => {
                let result = v.map_elements(ElementKind::Float, |value| match value {
                    Int(n) => Ok(Float(*n as f64)),
                    other => type_error("a vector of Ints", other),
                })?;
                Ok(result.into())
            }
            [other] => type_error(expected_error, &other),
        }
    });

    float_to_int_fn!("floor", |x: f64| x.floor() as i64);

    result.add_fn("fraction", |ctx| {
        let expected_error = "|Float|, or |Vector|";

        match ctx.take_args::<1>(expected_error)? {
            [Vector(v)] => {
                let result = map_floats(v, ElementKind::Float, |x| Float(x - x.floor()))?;
                Ok(result.into())
            }
            [value] => match as_float(&value) {
                Some(x) => Ok(RValue::Float(x - x.floor()).into()),
                None => type_error(expected_error, &value),
            },
        }
    });

    float_to_int_fn!("int", |x: f64| x.trunc() as i64);

    float_fn!("log", f64::ln);

    result.add_fn("max", |ctx| {
        let expected_error = "|Number, Number|";

        let [a, b] = ctx.take_args::<2>(expected_error)?;
        match compare_numbers(&a, &b) {
            Some(Ordering::Less) => Ok(b.into()),
            Some(_) => Ok(a.into()),
            None => unexpected_args(expected_error, &[a, b]),
        }
    });

    result.add_fn("min", |ctx| {
        let expected_error = "|Number, Number|";

        let [a, b] = ctx.take_args::<2>(expected_error)?;
        match compare_numbers(&a, &b) {
            Some(Ordering::Greater) => Ok(b.into()),
            Some(_) => Ok(a.into()),
            None => unexpected_args(expected_error, &[a, b]),
        }
    });

    result.add_fn("not", |ctx| {
        let expected_error = "|Int|";

        match ctx.take_args::<1>(expected_error)? {
            [Int(n)] => Ok(RValue::Int(!n).into()),
            [other] => type_error(expected_error, &other),
        }
    });

    bitwise_fn!("or", |a: i64, b: i64| a | b);

    result.add_fn("pow", |ctx| {
        let expected_error = "|Float, Float|";

        let [a, b] = ctx.take_args::<2>(expected_error)?;
        match (as_float(&a), as_float(&b)) {
            (Some(a), Some(b)) => Ok(RValue::Float(a.powf(b)).into()),
            _ => unexpected_args(expected_error, &[a, b]),
        }
    });

    float_to_int_fn!("round", |x: f64| (x + 0.5).trunc() as i64);

    bitwise_fn!("shl", |a: i64, b: i64| a.wrapping_shl(b as u32));
    bitwise_fn!("shr", |a: i64, b: i64| a.wrapping_shr(b as u32));

    float_fn!("sqrt", f64::sqrt);

    bitwise_fn!("xor", |a: i64, b: i64| a ^ b);

    result
}

/// Returns the value as a float, converting ints
pub fn as_float(value: &RValue) -> Option<f64> {
    match value {
        RValue::Int(n) => Some(*n as f64),
        RValue::Float(x) => Some(*x),
        _ => None,
    }
}

/// Applies `f` to each element of a numeric vector, treating ints as floats
///
/// Any non-numeric element aborts the transform with a type error.
pub fn map_floats(
    v: RVector,
    output_kind: ElementKind,
    f: impl Fn(f64) -> RValue,
) -> Result<RVector> {
    v.map_elements(output_kind, |value| match as_float(value) {
        Some(x) => Ok(f(x)),
        None => type_error("a numeric vector", value),
    })
}

fn compare_numbers(a: &RValue, b: &RValue) -> Option<Ordering> {
    match (a, b) {
        (RValue::Int(a), RValue::Int(b)) => Some(a.cmp(b)),
        _ => as_float(a)?.partial_cmp(&as_float(b)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_floats_coerces_ints() {
        let v = RVector::from_values(ElementKind::Any, [1.into(), 2.5.into()]).unwrap();
        let result = map_floats(v, ElementKind::Float, |x| RValue::Float(x * 2.0)).unwrap();
        assert_eq!(result.kind(), ElementKind::Float);
        assert_eq!(result.data().to_vec(), [RValue::Float(2.0), RValue::Float(5.0)]);
    }

    #[test]
    fn compare_mixed_numbers() {
        assert_eq!(compare_numbers(&1.into(), &1.5.into()), Some(Ordering::Less));
        assert_eq!(compare_numbers(&RValue::Nil, &1.into()), None);
    }
}
