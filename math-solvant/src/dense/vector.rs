//! Stack-allocated dense vector with a compile-time length

use crate::error::{GeError, Result};
use crate::traits::{DenseVector, Scalar};
use ndarray::{Array1, ArrayView1};
use std::fmt;
use std::ops::{Index, IndexMut, Sub};

/// Dense vector of length `N` stored on the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "vector length must be non-zero");

    /// Create a zero vector
    pub fn zeros() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            data: [T::zero(); N],
        }
    }

    /// Create a vector from its entries
    pub fn from_array(data: [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self { data }
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`: zero-length vectors cannot be constructed
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the entries
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Borrow the entries as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the vector, returning its entries
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Maximum absolute entry
    pub fn norm_inf(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &v| acc.max(v.abs()))
    }

    /// Copy into an owned `ndarray` vector
    pub fn to_array1(&self) -> Array1<T> {
        Array1::from_iter(self.data.iter().copied())
    }

    /// Copy out of an `ndarray` view, checking the length
    pub fn from_array1(v: ArrayView1<'_, T>) -> Result<Self> {
        if v.len() != N {
            return Err(GeError::DimensionMismatch {
                expected: N,
                got: v.len(),
            });
        }
        let mut out = Self::zeros();
        for (dst, &src) in out.data.iter_mut().zip(v.iter()) {
            *dst = src;
        }
        Ok(out)
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar, const N: usize> Sub for &Vector<T, N> {
    type Output = Vector<T, N>;

    fn sub(self, rhs: &Vector<T, N>) -> Vector<T, N> {
        let mut out = *self;
        for (o, &r) in out.data.iter_mut().zip(rhs.data.iter()) {
            *o -= r;
        }
        out
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.6}", v)?;
        }
        write!(f, "]")
    }
}

impl<T: Scalar, const N: usize> DenseVector<T> for Vector<T, N> {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    fn zeros_like(&self) -> Self {
        Self::zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zeros_and_index() {
        let mut v: Vector<f64, 4> = Vector::zeros();
        assert_eq!(v.len(), 4);
        v[2] = 7.0;
        assert_eq!(v.as_slice(), &[0.0, 0.0, 7.0, 0.0]);
    }

    #[test]
    fn test_norm_inf_and_sub() {
        let a = Vector::from([1.0_f64, -5.0, 2.0]);
        let b = Vector::from([1.0_f64, -4.5, 2.0]);
        assert_relative_eq!(a.norm_inf(), 5.0);
        assert_relative_eq!((&a - &b).norm_inf(), 0.5);
    }

    #[test]
    fn test_ndarray_roundtrip() {
        let v = Vector::from([1.0_f32, 2.0, 3.0]);
        let a = v.to_array1();
        assert_eq!(a.len(), 3);
        let back = Vector::<f32, 3>::from_array1(a.view()).expect("length matches");
        assert_eq!(back, v);

        let short = Vector::<f32, 4>::from_array1(a.view());
        assert!(matches!(
            short,
            Err(GeError::DimensionMismatch {
                expected: 4,
                got: 3
            })
        ));
    }

    #[test]
    fn test_display() {
        let v = Vector::from([1.0_f64, 0.5]);
        assert_eq!(v.to_string(), "[1.000000, 0.500000]");
    }
}
