use crate::{Field, Record};

/// Minimum and maximum bounds of all four record fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// The minimum values.
    pub min: Record,

    /// The maximum values.
    pub max: Record,
}

impl Bounds {
    /// Grows the bounds to encompass this record.
    ///
    /// NaN values are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pointnorm::{Bounds, Record};
    /// let mut bounds = Bounds::default();
    /// bounds.grow(&Record::new(1., 2., 3., 4.));
    /// assert_eq!(1., bounds.min.x);
    /// assert_eq!(4., bounds.max.size);
    /// ```
    pub fn grow(&mut self, record: &Record) {
        if record.x < self.min.x {
            self.min.x = record.x;
        }
        if record.y < self.min.y {
            self.min.y = record.y;
        }
        if record.z < self.min.z {
            self.min.z = record.z;
        }
        if record.size < self.min.size {
            self.min.size = record.size;
        }
        if record.x > self.max.x {
            self.max.x = record.x;
        }
        if record.y > self.max.y {
            self.max.y = record.y;
        }
        if record.z > self.max.z {
            self.max.z = record.z;
        }
        if record.size > self.max.size {
            self.max.size = record.size;
        }
    }

    /// Returns `max - min` for the given field.
    ///
    /// Zero means every value of the field is the same. Empty bounds have a
    /// span of negative infinity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pointnorm::{Bounds, Field, Record};
    /// let mut bounds = Bounds::default();
    /// bounds.grow(&Record::new(1., 2., 3., 4.));
    /// bounds.grow(&Record::new(3., 2., 3., 4.));
    /// assert_eq!(2., bounds.span(Field::X));
    /// assert_eq!(0., bounds.span(Field::Y));
    /// ```
    pub fn span(&self, field: Field) -> f64 {
        self.max[field] - self.min[field]
    }
}

impl Default for Bounds {
    fn default() -> Bounds {
        Bounds {
            min: Record {
                x: f64::INFINITY,
                y: f64::INFINITY,
                z: f64::INFINITY,
                size: f64::INFINITY,
            },
            max: Record {
                x: f64::NEG_INFINITY,
                y: f64::NEG_INFINITY,
                z: f64::NEG_INFINITY,
                size: f64::NEG_INFINITY,
            },
        }
    }
}

impl<'a> FromIterator<&'a Record> for Bounds {
    fn from_iter<I: IntoIterator<Item = &'a Record>>(iter: I) -> Bounds {
        let mut bounds = Bounds::default();
        for record in iter {
            bounds.grow(record);
        }
        bounds
    }
}
