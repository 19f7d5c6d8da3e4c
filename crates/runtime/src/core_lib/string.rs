//! The `string` core library module

use crate::{error::range_error, prelude::*};

/// Initializes the `string` core library module
pub fn make_module() -> Module {
    use RValue::{Int, Str, Vector};

    let mut result = Module::new();

    result.add_fn("substring", |ctx| {
        let expected_error = "|String, Int, Int|";

        match ctx.take_args::<3>(expected_error)? {
            [Str(s), Int(start), Int(size)] => Ok(s.substring(start, size)?.into()),
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("tokenize", |ctx| {
        let expected_error = "|String, String, String|";

        match ctx.take_args::<3>(expected_error)? {
            [Str(s), Str(delimiters), Str(whitespace)] => {
                let tokens = tokenize(s.as_bytes(), delimiters.as_bytes(), whitespace.as_bytes())
                    .map(|token| RValue::Str(RString::new(token)));
                Ok(RVector::from_values(ElementKind::Str, tokens)?.into())
            }
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("unicode2string", |ctx| {
        let expected_error = "|Vector|";

        match ctx.take_args::<1>(expected_error)? {
            [Vector(v)] => {
                let data = v.try_data()?;
                let mut result = String::with_capacity(data.len());
                for value in data.iter() {
                    match value {
                        Int(n) => match u32::try_from(*n).ok().and_then(char::from_u32) {
                            Some(c) => result.push(c),
                            None => return range_error("invalid unicode code point"),
                        },
                        other => return type_error("a vector of Ints", other),
                    }
                }
                Ok(RString::from(result).into())
            }
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("string2unicode", |ctx| {
        let expected_error = "|String|";

        match ctx.take_args::<1>(expected_error)? {
            [Str(s)] => match s.to_str() {
                Some(s) => {
                    let code_points = s.chars().map(|c| RValue::Int(u32::from(c).into()));
                    Ok(RVector::from_values(ElementKind::Int, code_points)?.into())
                }
                None => Ok(().into()),
            },
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result.add_fn("number2string", |ctx| {
        let expected_error = "|Int, Int, Int|";

        match ctx.take_args::<3>(expected_error)? {
            [Int(n), Int(base), Int(min_chars)] => {
                if !(2..=36).contains(&base) || min_chars > 32 {
                    return range_error("values out of range");
                }
                Ok(RString::from(number_to_string(n, base, min_chars)).into())
            }
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result
}

/// Splits `s` into segments separated by any of the bytes in `delimiters`
///
/// Leading whitespace is skipped, and each segment has its trailing whitespace removed. A run of
/// delimiters ends a single segment, so `"; A ; B C; "` produces `["", "A", "B C"]` when `;` is
/// the delimiter and ` ` is whitespace.
pub fn tokenize<'a>(
    s: &'a [u8],
    delimiters: &'a [u8],
    whitespace: &'a [u8],
) -> impl Iterator<Item = &'a [u8]> + 'a {
    let is_whitespace = move |b: &u8| whitespace.contains(b);
    let is_delimiter = move |b: &u8| delimiters.contains(b);
    let skip = move |s: &'a [u8], f: &dyn Fn(&u8) -> bool| -> &'a [u8] {
        let n = s.iter().take_while(|b| f(b)).count();
        &s[n..]
    };

    let mut remaining = skip(s, &is_whitespace);

    std::iter::from_fn(move || {
        if remaining.is_empty() {
            return None;
        }

        let delimiter = remaining
            .iter()
            .position(is_delimiter)
            .unwrap_or(remaining.len());
        let (segment, rest) = remaining.split_at(delimiter);

        let trimmed = segment.len()
            - segment
                .iter()
                .rev()
                .take_while(|b| is_whitespace(b))
                .count();

        remaining = skip(skip(rest, &is_delimiter), &is_whitespace);
        Some(&segment[..trimmed])
    })
}

// Renders the unsigned interpretation of `n`, padded with zeros to at least `min_chars`
fn number_to_string(n: i64, base: i64, min_chars: i64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    let base = base.unsigned_abs();
    let mut n = n as u64;
    let mut digits = Vec::new();

    while n != 0 || (digits.len() as i64) < min_chars {
        digits.push(DIGITS[(n % base) as usize]);
        n /= base;
    }

    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
