use crate::error::{LinAlgError, Result};
use ndarray::Array1;
use std::fmt;
use std::ops::{Mul, Neg};

/// An owned, fixed-size vector of `f64` entries.
///
/// The size is set at construction and never changes; `Clone` produces an
/// independent deep copy. Element access is checked and available both
/// zero-based (`get`/`set`) and one-based (`at`/`set_at`), with the one-based
/// index `i` referring to the same slot as zero-based `i - 1`.
///
/// # Examples
///
/// ```rust
/// use linsys::Vector;
///
/// let mut v = Vector::new(3);
/// v.set(0, 1.0).unwrap();
/// v.set_at(2, 5.0).unwrap(); // one-based: second slot
/// assert_eq!(v.get(1).unwrap(), 5.0);
/// assert_eq!(v.at(1).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    pub(crate) data: Array1<f64>,
}

impl Vector {
    /// Creates a zero vector of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            data: Array1::zeros(size),
        }
    }

    /// Creates a vector that takes ownership of the given entries.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            data: Array1::from_vec(data),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads the entry at a zero-based index.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or(LinAlgError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns a mutable reference to the entry at a zero-based index.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64> {
        let len = self.len();
        self.data
            .get_mut(index)
            .ok_or(LinAlgError::IndexOutOfRange { index, len })
    }

    /// Writes the entry at a zero-based index.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Reads the entry at a one-based index (valid range `[1, len]`).
    pub fn at(&self, index: usize) -> Result<f64> {
        if index < 1 || index > self.len() {
            return Err(LinAlgError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.data[index - 1])
    }

    /// Returns a mutable reference to the entry at a one-based index.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut f64> {
        let len = self.len();
        if index < 1 || index > len {
            return Err(LinAlgError::IndexOutOfRange { index, len });
        }
        Ok(&mut self.data[index - 1])
    }

    /// Writes the entry at a one-based index.
    pub fn set_at(&mut self, index: usize, value: f64) -> Result<()> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    /// Element-wise sum of two vectors of equal size.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the sizes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_len(other)?;
        Ok(Self::from(&self.data + &other.data))
    }

    /// Element-wise difference of two vectors of equal size.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the sizes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_len(other)?;
        Ok(Self::from(&self.data - &other.data))
    }

    /// Dot product of two vectors of equal size.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if the sizes differ.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.check_same_len(other)?;
        Ok(self.data.dot(&other.data))
    }

    /// Returns a new vector with every entry scaled by `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::from(&self.data * scalar)
    }

    /// Euclidean norm, `sqrt(v . v)`.
    pub fn norm(&self) -> f64 {
        self.data.dot(&self.data).sqrt()
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    /// Copies the entries into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    /// Writes a human-readable dump to stdout. Diagnostic only; the format
    /// is not a stable serialization.
    pub fn print(&self) {
        println!("{self}");
    }

    fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinAlgError::SizeMismatch(format!(
                "vector lengths {} and {}",
                self.len(),
                other.len()
            )));
        }
        Ok(())
    }
}

impl From<Array1<f64>> for Vector {
    fn from(data: Array1<f64>) -> Self {
        Self { data }
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::from(self.data.mapv(|v| -v))
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::from(-self.data)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        Vector::from(self.data * scalar)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_filled() {
        let v = Vector::new(4);
        assert_eq!(v.len(), 4);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut v = Vector::from_vec(vec![1.0, 2.0]);
        let copy = v.clone();
        v.set(0, 9.0).unwrap();
        assert_eq!(copy.get(0).unwrap(), 1.0);
    }

    #[test]
    fn test_add_sub_roundtrip() {
        let u = Vector::from_vec(vec![1.5, -2.0, 0.25]);
        let v = Vector::from_vec(vec![4.0, 0.5, -1.0]);

        let back = u.add(&v).unwrap().sub(&v).unwrap();
        for (a, b) in back.iter().zip(u.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_add_size_mismatch() {
        let u = Vector::new(2);
        let v = Vector::new(3);
        assert!(matches!(u.add(&v), Err(LinAlgError::SizeMismatch(_))));
        assert!(matches!(u.sub(&v), Err(LinAlgError::SizeMismatch(_))));
    }

    #[test]
    fn test_dot_product() {
        let u = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        let v = Vector::from_vec(vec![4.0, -5.0, 6.0]);
        assert!((u.dot(&v).unwrap() - 12.0).abs() < 1e-12);

        let w = Vector::new(2);
        assert!(matches!(u.dot(&w), Err(LinAlgError::SizeMismatch(_))));
    }

    #[test]
    fn test_scale_and_neg() {
        let v = Vector::from_vec(vec![1.0, -2.0]);
        let doubled = v.scale(2.0);
        assert_eq!(doubled.to_vec(), vec![2.0, -4.0]);

        let negated = -&v;
        assert_eq!(negated.to_vec(), vec![-1.0, 2.0]);
    }

    #[test]
    fn test_zero_and_one_based_alias() {
        let mut v = Vector::from_vec(vec![10.0, 20.0, 30.0]);
        // v[0] and v(1) are the same slot.
        assert_eq!(v.get(0).unwrap(), v.at(1).unwrap());
        assert_eq!(v.get(2).unwrap(), v.at(3).unwrap());

        v.set_at(1, 99.0).unwrap();
        assert_eq!(v.get(0).unwrap(), 99.0);
    }

    #[test]
    fn test_out_of_range_both_bases() {
        let mut v = Vector::new(3);
        assert!(matches!(
            v.get(3),
            Err(LinAlgError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            v.at(0),
            Err(LinAlgError::IndexOutOfRange { index: 0, len: 3 })
        ));
        assert!(matches!(v.at(4), Err(LinAlgError::IndexOutOfRange { .. })));
        assert!(matches!(
            v.set(5, 1.0),
            Err(LinAlgError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_norm() {
        let v = Vector::from_vec(vec![3.0, 4.0]);
        assert!((v.norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let v = Vector::from_vec(vec![1.0, 2.5]);
        assert_eq!(format!("{v}"), "[1, 2.5]");
    }
}
