use rook_runtime::prelude::*;

/// Returns an Int vector containing the given integers
pub fn int_vector<T>(values: &[T]) -> RVector
where
    T: Copy,
    i64: From<T>,
{
    let values = values.iter().map(|n| RValue::Int(i64::from(*n)));
    RVector::from_values(ElementKind::Int, values).expect("ints are accepted by an Int vector")
}

/// Returns a Float vector containing the given floats
pub fn float_vector(values: &[f64]) -> RVector {
    let values = values.iter().map(|x| RValue::Float(*x));
    RVector::from_values(ElementKind::Float, values).expect("floats are accepted by a Float vector")
}

/// Returns a generic vector containing clones of the given values
pub fn vector(values: &[RValue]) -> RVector {
    RVector::from_values(ElementKind::Any, values.iter().cloned())
        .expect("any value is accepted by a generic vector")
}

/// Returns the vector's elements as a `Vec`
pub fn contents(v: &RVector) -> Vec<RValue> {
    v.data().to_vec()
}

/// Returns the integers contained in a vector, panicking if any element isn't an Int
pub fn ints(v: &RVector) -> Vec<i64> {
    v.data()
        .iter()
        .map(|value| match value {
            RValue::Int(n) => *n,
            other => panic!("expected an Int, found {other:?}"),
        })
        .collect()
}
