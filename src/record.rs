//! Point samples.

use std::fmt;
use std::ops::Index;

/// One of the four values carried by a [Record].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// The x coordinate.
    X,
    /// The y coordinate.
    Y,
    /// The z coordinate.
    Z,
    /// The sample's size, e.g. a sphere radius in a scatter plot.
    Size,
}

impl Field {
    /// All fields, in column order.
    pub const ALL: [Field; 4] = [Field::X, Field::Y, Field::Z, Field::Size];

    /// The spatial fields.
    pub const XYZ: [Field; 3] = [Field::X, Field::Y, Field::Z];

    /// Returns this field's zero-based column in the source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::Field;
    /// assert_eq!(3, Field::Size.column());
    /// ```
    pub fn column(self) -> usize {
        match self {
            Field::X => 0,
            Field::Y => 1,
            Field::Z => 2,
            Field::Size => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Field::X => write!(f, "x"),
            Field::Y => write!(f, "y"),
            Field::Z => write!(f, "z"),
            Field::Size => write!(f, "size"),
        }
    }
}

/// A single point sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Record {
    /// The x coordinate.
    pub x: f64,

    /// The y coordinate.
    pub y: f64,

    /// The z coordinate.
    pub z: f64,

    /// The sample size.
    pub size: f64,
}

impl Record {
    /// Creates a new record.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::Record;
    /// let record = Record::new(1., 2., 3., 10.);
    /// assert_eq!(10., record.size);
    /// ```
    pub fn new(x: f64, y: f64, z: f64, size: f64) -> Record {
        Record { x, y, z, size }
    }

    /// Builds a record by evaluating `f` once per field.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::{Field, Record};
    /// let record = Record::from_fn(|field| field.column() as f64);
    /// assert_eq!(Record::new(0., 1., 2., 3.), record);
    /// ```
    pub fn from_fn<F: FnMut(Field) -> f64>(mut f: F) -> Record {
        Record {
            x: f(Field::X),
            y: f(Field::Y),
            z: f(Field::Z),
            size: f(Field::Size),
        }
    }

    /// Returns a new record with `f` applied to every field.
    pub fn map<F: FnMut(Field, f64) -> f64>(&self, mut f: F) -> Record {
        Record::from_fn(|field| f(field, self[field]))
    }

    /// Returns true if all four values are finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::Record;
    /// assert!(Record::new(1., 2., 3., 4.).is_finite());
    /// assert!(!Record::new(1., f64::NAN, 3., 4.).is_finite());
    /// ```
    pub fn is_finite(&self) -> bool {
        Field::ALL.iter().all(|&field| self[field].is_finite())
    }
}

impl Index<Field> for Record {
    type Output = f64;

    fn index(&self, field: Field) -> &f64 {
        match field {
            Field::X => &self.x,
            Field::Y => &self.y,
            Field::Z => &self.z,
            Field::Size => &self.size,
        }
    }
}

impl From<[f64; 4]> for Record {
    fn from(values: [f64; 4]) -> Record {
        Record::new(values[0], values[1], values[2], values[3])
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}) {}", self.x, self.y, self.z, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_by_field() {
        let record = Record::new(1., 2., 3., 4.);
        assert_eq!(1., record[Field::X]);
        assert_eq!(2., record[Field::Y]);
        assert_eq!(3., record[Field::Z]);
        assert_eq!(4., record[Field::Size]);
    }

    #[test]
    fn map_leaves_original_alone() {
        let record = Record::new(1., 2., 3., 4.);
        let doubled = record.map(|_, value| value * 2.);
        assert_eq!(Record::new(2., 4., 6., 8.), doubled);
        assert_eq!(Record::new(1., 2., 3., 4.), record);
    }

    #[test]
    fn display() {
        assert_eq!("(1, 2, 3) 4", Record::new(1., 2., 3., 4.).to_string());
        assert_eq!("size", Field::Size.to_string());
    }
}
