//! Storage trait implementations for `ndarray` containers

use crate::traits::{DenseVector, Scalar, SquareMatrix};
use ndarray::{Array1, Array2};

impl<T: Scalar> DenseVector<T> for Array1<T> {
    #[inline]
    fn len(&self) -> usize {
        self.dim()
    }

    fn zeros_like(&self) -> Self {
        Array1::zeros(self.dim())
    }
}

impl<T: Scalar> SquareMatrix<T> for Array2<T> {
    type Vector = Array1<T>;

    #[inline]
    fn dim(&self) -> usize {
        self.nrows()
    }

    fn identity_like(&self) -> Self {
        Array2::eye(self.nrows())
    }

    fn interchange_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.ncols() {
            self.swap((a, j), (b, j));
        }
    }

    fn matvec(&self, v: &Array1<T>) -> Array1<T> {
        self.dot(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_array_interchange_rows() {
        let mut a = array![[1.0_f64, 2.0], [3.0, 4.0], [5.0, 6.0]];
        SquareMatrix::interchange_rows(&mut a, 0, 2);
        assert_eq!(a, array![[5.0, 6.0], [3.0, 4.0], [1.0, 2.0]]);
    }

    #[test]
    fn test_array_identity_and_matvec() {
        let a = array![[2.0_f64, 0.0], [1.0, 3.0]];
        let id = a.identity_like();
        assert_eq!(id, array![[1.0, 0.0], [0.0, 1.0]]);

        let y = a.matvec(&array![1.0, 2.0]);
        assert_eq!(y, array![2.0, 7.0]);
        assert_eq!(DenseVector::len(&y), 2);
        assert_eq!(y.zeros_like(), array![0.0, 0.0]);
    }
}
