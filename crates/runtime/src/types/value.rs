//! The core value type used in the Rook runtime

use crate::{RResource, RString, RVector, Result};
use rook_memory::{Address, lazy};
use std::fmt;

/// The core Value type for Rook
///
/// Scalars are stored inline, strings, vectors, and resources are handles to shared heap objects.
/// Cloning a value adds an owner to its heap object, dropping it releases that ownership.
#[derive(Clone, Default)]
pub enum RValue {
    /// The absence of a value
    #[default]
    Nil,

    /// A signed 64 bit integer
    Int(i64),

    /// A 64 bit float
    Float(f64),

    /// A shared byte string
    Str(RString),

    /// A shared vector of values
    Vector(RVector),

    /// An opaque handle to a host-provided resource, e.g. a coroutine
    Resource(RResource),
}

/// The kind of a [RValue], without its payload
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Nil,
    Int,
    Float,
    Str,
    Vector,
    Resource,
}

impl RValue {
    /// Returns the value's kind
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Nil => ValueKind::Nil,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Vector(_) => ValueKind::Vector,
            Self::Resource(_) => ValueKind::Resource,
        }
    }

    /// Returns the value's type as a [RString]
    pub fn type_as_string(&self) -> RString {
        match self {
            Self::Nil => lazy!(RString; "Nil"),
            Self::Int(_) => lazy!(RString; "Int"),
            Self::Float(_) => lazy!(RString; "Float"),
            Self::Str(_) => lazy!(RString; "String"),
            Self::Vector(_) => lazy!(RString; "Vector"),
            Self::Resource(r) => r.type_name(),
        }
    }

    /// Returns true if the value counts as true in conditions
    ///
    /// `Nil`, `0`, and `0.0` are false, everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Int(n) => *n != 0,
            Self::Float(f) => *f != 0.0,
            _ => true,
        }
    }

    /// Structural equality
    ///
    /// Vectors are compared element by element (recursively), strings by their contents, and
    /// resources by identity. Values of different kinds are never equal, so `1` and `1.0` differ.
    ///
    /// Cyclic vectors are supported: a pair of vectors that's reached again while it's still
    /// being compared is treated as equal, so `a = [a]` and `b = [b]` are equal.
    ///
    /// An error is returned if one of the vectors is being modified.
    pub fn deep_eq(&self, other: &RValue) -> Result<bool> {
        self.deep_eq_inner(other, &mut Vec::new())
    }

    fn deep_eq_inner(
        &self,
        other: &RValue,
        pending: &mut Vec<(Address, Address)>,
    ) -> Result<bool> {
        use RValue::*;

        let result = match (self, other) {
            (Nil, Nil) => true,
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Vector(a), Vector(b)) => {
                if a.ptr_eq(b) {
                    return Ok(true);
                }
                let pair = (a.address(), b.address());
                if pending.contains(&pair) {
                    return Ok(true);
                }

                let a = a.try_data()?;
                let b = b.try_data()?;
                if a.len() != b.len() {
                    return Ok(false);
                }

                pending.push(pair);
                let mut result = Ok(true);
                for (x, y) in a.iter().zip(b.iter()) {
                    result = x.deep_eq_inner(y, pending);
                    if !matches!(result, Ok(true)) {
                        break;
                    }
                }
                pending.pop();
                return result;
            }
            (Resource(a), Resource(b)) => a.ptr_eq(b),
            _ => false,
        };

        Ok(result)
    }

    /// The number of owners of the value's heap object, or `None` for scalars
    pub fn ref_count(&self) -> Option<usize> {
        match self {
            Self::Str(s) => Some(s.ref_count()),
            Self::Vector(v) => Some(v.ref_count()),
            Self::Resource(r) => Some(r.ref_count()),
            _ => None,
        }
    }

    fn debug_fmt(&self, f: &mut fmt::Formatter<'_>, parents: &mut Vec<Address>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Resource(r) => write!(f, "{}@{}", r.type_name(), r.address()),
            Self::Vector(v) => {
                let id = v.address();
                if parents.contains(&id) {
                    return f.write_str("[...]");
                }
                let Ok(data) = v.try_data() else {
                    return f.write_str("[<in use>]");
                };
                parents.push(id);
                f.write_str("[")?;
                for (i, element) in data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    element.debug_fmt(f, parents)?;
                }
                parents.pop();
                f.write_str("]")
            }
        }
    }
}

impl fmt::Debug for RValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.debug_fmt(f, &mut Vec::new())
    }
}

// Values that can't be compared because a vector is being modified are treated as unequal.
impl PartialEq for RValue {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.deep_eq(other), Ok(true))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "Nil",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Str => "String",
            Self::Vector => "Vector",
            Self::Resource => "Resource",
        };
        f.write_str(name)
    }
}

impl From<()> for RValue {
    fn from(_: ()) -> Self {
        Self::Nil
    }
}

impl From<bool> for RValue {
    fn from(value: bool) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for RValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<usize> for RValue {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for RValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for RValue {
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}

impl From<RString> for RValue {
    fn from(value: RString) -> Self {
        Self::Str(value)
    }
}

impl From<RVector> for RValue {
    fn from(value: RVector) -> Self {
        Self::Vector(value)
    }
}

impl From<RResource> for RValue {
    fn from(value: RResource) -> Self {
        Self::Resource(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementKind;

    #[test]
    fn test_value_mem_size() {
        // Scalars are inline and heap objects are single pointers (wide for strings and
        // resources), so a value fits in 24 bytes including the tag.
        assert!(std::mem::size_of::<RValue>() <= 24);
    }

    #[test]
    fn deep_eq_recurses_into_vectors() {
        let a = RVector::from_values(ElementKind::Any, [1.into(), "x".into()]).unwrap();
        let b = RVector::from_values(ElementKind::Any, [1.into(), "x".into()]).unwrap();
        let outer_a = RVector::from_values(ElementKind::Any, [a.into()]).unwrap();
        let outer_b = RVector::from_values(ElementKind::Any, [b.into()]).unwrap();

        assert!(RValue::from(outer_a).deep_eq(&outer_b.into()).unwrap());
    }

    #[test]
    fn deep_eq_requires_matching_kinds() {
        assert!(!RValue::Int(1).deep_eq(&RValue::Float(1.0)).unwrap());
        assert!(!RValue::Nil.deep_eq(&RValue::Int(0)).unwrap());
        assert!(RValue::Nil.deep_eq(&RValue::Nil).unwrap());
    }

    #[test]
    fn debug_output_stops_at_cycles() {
        let v = RVector::with_capacity(1, ElementKind::Any);
        v.data_mut().push(v.clone().into()).unwrap();
        assert_eq!(format!("{:?}", RValue::from(v.clone())), "[[...]]");
        // Break the cycle so that the vector is released
        v.data_mut().pop().unwrap();
        assert_eq!(v.ref_count(), 1);
    }

    #[test]
    fn deep_eq_on_cyclic_vectors() {
        let self_containing = || {
            let v = RVector::with_capacity(2, ElementKind::Any);
            v.data_mut().push(1.into()).unwrap();
            v.data_mut().push(v.clone().into()).unwrap();
            v
        };
        let a = self_containing();
        let b = self_containing();
        let c = RVector::from_values(ElementKind::Any, [2.into(), b.clone().into()]).unwrap();

        assert!(RValue::from(a.clone()).deep_eq(&b.clone().into()).unwrap());
        assert!(!RValue::from(a.clone()).deep_eq(&c.into()).unwrap());

        for v in [a, b] {
            v.data_mut().pop().unwrap();
            assert_eq!(v.ref_count(), 1);
        }
    }

    #[test]
    fn deep_eq_fails_while_a_vector_is_being_modified() {
        let a = RVector::from_values(ElementKind::Int, [1.into()]).unwrap();
        let b = RVector::from_values(ElementKind::Int, [1.into()]).unwrap();

        let _exclusive = a.data_mut();
        let error = RValue::from(a.clone()).deep_eq(&b.into()).unwrap_err();
        assert_eq!(error.kind(), &crate::ErrorKind::AlreadyBorrowed);
        assert_eq!(format!("{:?}", RValue::from(a.clone())), "[<in use>]");
    }

    #[test]
    fn truthiness() {
        assert!(!RValue::Nil.is_truthy());
        assert!(!RValue::Int(0).is_truthy());
        assert!(!RValue::Float(0.0).is_truthy());
        assert!(RValue::Int(-1).is_truthy());
        assert!(RValue::from("").is_truthy());
    }
}
