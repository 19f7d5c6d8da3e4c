use crate::{
    Borrow, BorrowMut, ErrorKind, PtrMut, RValue, Result,
    error::{range_error, type_error},
    runtime_error,
    types::resolve_range,
};
use rook_memory::Address;
use std::{fmt, iter, ops::Deref};

/// The underlying storage used by [RVector]
pub type ValueVec = smallvec::SmallVec<[RValue; 4]>;

/// The declared kind of the elements contained in a vector
///
/// Builtins that need homogeneous data check values against the declared kind when they are
/// added to the vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ElementKind {
    /// Any kind of value, including nil
    #[default]
    Any,
    /// Integers only
    Int,
    /// Floats only
    Float,
    /// Strings only
    Str,
    /// Vectors only
    Vector,
    /// Resources only
    Resource,
}

impl ElementKind {
    /// Returns true if the value can be stored in a vector with this element kind
    pub fn accepts(self, value: &RValue) -> bool {
        matches!(
            (self, value),
            (Self::Any, _)
                | (Self::Int, RValue::Int(_))
                | (Self::Float, RValue::Float(_))
                | (Self::Str, RValue::Str(_))
                | (Self::Vector, RValue::Vector(_))
                | (Self::Resource, RValue::Resource(_))
        )
    }

    /// Returns the element kind of the result of appending `b` to `a`
    ///
    /// Matching kinds are kept. A generic side is narrowed to the other side's kind when all of
    /// its elements fit, otherwise the result stays generic. Two different specific kinds can't be
    /// combined.
    fn unify(a: &VectorData, b: &VectorData) -> Result<Self> {
        match (a.kind, b.kind) {
            (x, y) if x == y => Ok(x),
            (Self::Any, specific) => Ok(a.narrowed_kind(specific)),
            (specific, Self::Any) => Ok(b.narrowed_kind(specific)),
            (x, y) => runtime_error!(ErrorKind::TypeMismatch {
                expected: format!("a vector of {x}"),
                found: format!("a vector of {y}"),
            }),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Any => "Any",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Str => "String",
            Self::Vector => "Vector",
            Self::Resource => "Resource",
        };
        f.write_str(name)
    }
}

/// The contents of a vector: its declared element kind, and the elements themselves
///
/// Shared access derefs to a slice of the elements. Mutating operations are only available through
/// an exclusive borrow (see [RVector::data_mut]), so code holding a `&mut VectorData` knows that
/// nothing else can observe the vector while it changes.
#[derive(Clone, Default)]
pub struct VectorData {
    kind: ElementKind,
    elements: ValueVec,
}

impl VectorData {
    /// The declared element kind
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Appends a value to the end of the vector, taking ownership of it
    pub fn push(&mut self, value: RValue) -> Result<()> {
        self.check_kind(&value)?;
        self.elements.push(value);
        Ok(())
    }

    /// Removes the last value from the vector and returns it
    pub fn pop(&mut self) -> Result<RValue> {
        match self.elements.pop() {
            Some(value) => Ok(value),
            None => runtime_error!(ErrorKind::EmptyContainer),
        }
    }

    /// Returns a new owner of the last value in the vector, leaving the vector unchanged
    pub fn top(&self) -> Result<RValue> {
        match self.elements.last() {
            Some(value) => Ok(value.clone()),
            None => runtime_error!(ErrorKind::EmptyContainer),
        }
    }

    /// Inserts `count` copies of `value` at `index`, shifting the following elements upward
    ///
    /// `index` may be equal to the vector's length. Each copy is a new owner of the value, with
    /// the value that was passed in taking the place of the last copy.
    pub fn insert(&mut self, value: RValue, index: i64, count: i64) -> Result<()> {
        let (Ok(index), Ok(count)) = (usize::try_from(index), usize::try_from(count)) else {
            return range_error("index or count out of range");
        };
        if index > self.len() || count == 0 {
            return range_error("index or count out of range");
        }
        self.check_kind(&value)?;

        if self.elements.try_reserve(count).is_err() {
            return range_error("count is too large");
        }
        self.elements
            .insert_many(index, iter::repeat_n(value, count));
        Ok(())
    }

    /// Removes `count` elements starting at `index`, shifting the following elements downward
    ///
    /// The first removed element is returned, the others are released.
    pub fn remove(&mut self, index: i64, count: i64) -> Result<RValue> {
        let (Ok(index), Ok(count)) = (usize::try_from(index), usize::try_from(count)) else {
            return range_error("index or count out of range");
        };
        let end = index.saturating_add(count);
        if count == 0 || end > self.len() {
            return range_error("index or count out of range");
        }

        let mut removed = self.elements.drain(index..end);
        match removed.next() {
            Some(first) => Ok(first),
            None => range_error("index or count out of range"),
        }
    }

    fn check_kind(&self, value: &RValue) -> Result<()> {
        if self.kind.accepts(value) {
            Ok(())
        } else {
            type_error(&format!("a value matching the vector's kind ({})", self.kind), value)
        }
    }

    // The kind that should be used when the vector's elements are combined with a vector of
    // `specific` elements.
    fn narrowed_kind(&self, specific: ElementKind) -> ElementKind {
        if self.elements.iter().all(|value| specific.accepts(value)) {
            specific
        } else {
            ElementKind::Any
        }
    }
}

impl Deref for VectorData {
    type Target = [RValue];

    fn deref(&self) -> &[RValue] {
        &self.elements
    }
}

/// The Rook runtime's Vector type
///
/// A shared handle to [VectorData]. Cloning the handle adds an owner, the contents are released
/// when the last owner is dropped.
///
/// Operations come in two families:
/// - exclusive operations (`push`, `pop`, `insert`, `remove`) mutate the vector in place, and are
///   available on the [VectorData] returned by [RVector::data_mut].
/// - persistent operations (`replace`, `slice`, `copy`, `append`, `map_elements`) consume the
///   handle and produce a new vector, leaving any other owners of the original untouched.
#[derive(Clone, Default)]
pub struct RVector(PtrMut<VectorData>);

impl RVector {
    /// Creates an empty vector with room for `capacity` elements
    pub fn with_capacity(capacity: usize, kind: ElementKind) -> Self {
        Self::with_data(VectorData {
            kind,
            elements: ValueVec::with_capacity(capacity),
        })
    }

    /// Creates a vector containing the provided values
    ///
    /// An error is returned if any of the values doesn't match the declared element kind.
    pub fn from_values(kind: ElementKind, values: impl IntoIterator<Item = RValue>) -> Result<Self> {
        let mut data = VectorData {
            kind,
            elements: ValueVec::new(),
        };
        for value in values {
            data.push(value)?;
        }
        Ok(Self::with_data(data))
    }

    fn with_data(data: VectorData) -> Self {
        Self(data.into())
    }

    /// Returns the number of elements in the vector
    ///
    /// Like [RVector::data], this panics if the vector is being modified.
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns true if there are no elements in the vector
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The vector's declared element kind
    pub fn kind(&self) -> ElementKind {
        self.data().kind
    }

    /// Returns a shared borrow of the vector's contents
    ///
    /// Panics (or blocks with the `arc` feature) if the vector is being modified,
    /// see [RVector::try_data].
    pub fn data(&self) -> Borrow<'_, VectorData> {
        self.0.borrow()
    }

    /// Returns a shared borrow of the vector's contents, or an error if it's being modified
    pub fn try_data(&self) -> Result<Borrow<'_, VectorData>> {
        Ok(self.0.try_borrow()?)
    }

    /// Returns an exclusive borrow of the vector's contents
    ///
    /// Panics (or blocks with the `arc` feature) if the vector is already borrowed,
    /// see [RVector::try_data_mut].
    pub fn data_mut(&self) -> BorrowMut<'_, VectorData> {
        self.0.borrow_mut()
    }

    /// Returns an exclusive borrow of the vector's contents, or an error if it's already borrowed
    pub fn try_data_mut(&self) -> Result<BorrowMut<'_, VectorData>> {
        Ok(self.0.try_borrow_mut()?)
    }

    /// The number of owners of the vector
    pub fn ref_count(&self) -> usize {
        PtrMut::ref_count(&self.0)
    }

    /// Returns true if both handles refer to the same vector
    pub fn ptr_eq(&self, other: &Self) -> bool {
        PtrMut::ptr_eq(&self.0, &other.0)
    }

    /// The address of the vector's allocation
    pub fn address(&self) -> Address {
        PtrMut::address(&self.0)
    }

    /// Removes every element that is structurally equal to `target`, returning the number of
    /// removed elements
    pub fn remove_all_equal(&self, target: &RValue) -> Result<usize> {
        // Comparisons may need to look inside this vector (e.g. when the target contains it),
        // so the matches are found before the exclusive borrow is taken.
        let matches = self
            .try_data()?
            .iter()
            .map(|value| value.deep_eq(target))
            .collect::<Result<Vec<_>>>()?;

        let removed = matches.iter().filter(|matched| **matched).count();
        if removed > 0 {
            let mut data = self.try_data_mut()?;
            let mut matches = matches.into_iter();
            data.elements
                .retain(|_| !matches.next().unwrap_or(false));
        }

        Ok(removed)
    }

    /// Returns a copy of the vector with the element at `index` replaced by `value`
    pub fn replace(self, index: i64, value: RValue) -> Result<Self> {
        let data = self.try_data()?;
        let index = match usize::try_from(index) {
            Ok(index) if index < data.len() => index,
            _ => return range_error("index out of range"),
        };
        data.check_kind(&value)?;

        let mut result = data.clone();
        result.elements[index] = value;
        Ok(Self::with_data(result))
    }

    /// Returns a new vector containing `size` elements starting at `start`
    ///
    /// Negative values for `start` or `size` are offsets from the end of the vector.
    pub fn slice(self, start: i64, size: i64) -> Result<Self> {
        let data = self.try_data()?;
        match resolve_range(data.len(), start, size) {
            Some(range) => Ok(Self::with_data(VectorData {
                kind: data.kind,
                elements: data.elements[range].iter().cloned().collect(),
            })),
            None => range_error("values out of range"),
        }
    }

    /// Returns a shallow copy of the vector
    pub fn copy(self) -> Result<Self> {
        let data = self.try_data()?.clone();
        Ok(Self::with_data(data))
    }

    /// Returns a new vector containing the elements of `self` followed by those of `other`
    pub fn append(self, other: Self) -> Result<Self> {
        let a = self.try_data()?;
        let b = other.try_data()?;
        let kind = ElementKind::unify(&a, &b)?;

        let mut elements = ValueVec::with_capacity(a.len() + b.len());
        elements.extend(a.iter().cloned());
        elements.extend(b.iter().cloned());

        Ok(Self::with_data(VectorData { kind, elements }))
    }

    /// Returns a new vector containing the result of calling `f` with each element
    ///
    /// The first error returned by `f` (or a result that doesn't match `output_kind`) aborts the
    /// whole operation, the partially built output is discarded.
    pub fn map_elements<F>(self, output_kind: ElementKind, mut f: F) -> Result<Self>
    where
        F: FnMut(&RValue) -> Result<RValue>,
    {
        let data = self.try_data()?;
        let mut output = VectorData {
            kind: output_kind,
            elements: ValueVec::with_capacity(data.len()),
        };
        for value in data.iter() {
            output.push(f(value)?)?;
        }
        Ok(Self::with_data(output))
    }
}

impl fmt::Debug for RVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&RValue::Vector(self.clone()), f)
    }
}

impl PartialEq for RVector {
    fn eq(&self, other: &Self) -> bool {
        RValue::Vector(self.clone()) == RValue::Vector(other.clone())
    }
}
