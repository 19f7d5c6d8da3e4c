//! Seedable random number builtins for the Rook runtime
//!
//! Each module created by [make_module] owns its own generator, so separate runtimes (or separate
//! modules in the same runtime) don't share random state.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rook_runtime::{PtrMut, prelude::*};

/// Initializes a module containing the `rnd`, `rndfloat`, and `rndseed` builtins
///
/// The generator is seeded with `seed` if provided, otherwise from the OS's entropy source.
pub fn make_module(seed: Option<u64>) -> Module {
    use RValue::{Int, Vector};

    let rng = PtrMut::from(match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_os_rng(),
    });

    let mut result = Module::new();

    result.add_fn("rnd", {
        let rng = rng.clone();
        move |ctx| {
            let expected_error = "|Int|, or |Vector|";

            match ctx.take_args::<1>(expected_error)? {
                [Int(max)] => Ok(RValue::Int(random_below(&mut rng.borrow_mut(), max)).into()),
                [Vector(v)] => {
                    let mut rng = rng.borrow_mut();
                    let result = v.map_elements(ElementKind::Int, |value| match value {
                        Int(max) => Ok(Int(random_below(&mut rng, *max))),
                        other => type_error("a vector of Ints", other),
                    })?;
                    Ok(result.into())
                }
                [other] => type_error(expected_error, &other),
            }
        }
    });

    result.add_fn("rndfloat", {
        let rng = rng.clone();
        move |ctx| {
            let [] = ctx.take_args::<0>("||")?;
            Ok(RValue::Float(rng.borrow_mut().random::<f64>()).into())
        }
    });

    result.add_fn("rndseed", move |ctx| {
        let expected_error = "|Int|";

        match ctx.take_args::<1>(expected_error)? {
            [Int(seed)] => {
                *rng.borrow_mut() = Xoshiro256PlusPlus::seed_from_u64(seed as u64);
                Ok(().into())
            }
            unexpected => unexpected_args(expected_error, &unexpected),
        }
    });

    result
}

// Returns a random value in `[0, max)`, with `max` clamped to at least 1
fn random_below(rng: &mut Xoshiro256PlusPlus, max: i64) -> i64 {
    rng.random_range(0..max.max(1))
}
