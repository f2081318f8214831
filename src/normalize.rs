//! Rescale datasets into a bounded range.
//!
//! Two methods are available:
//!
//! - [Method::MinMax] maps every field onto `[0, 1]` independently, using the
//!   field's minimum and maximum.
//! - [Method::CenteredMaxAbs] subtracts each field's mean, then divides x, y, and
//!   z by one shared scale (the largest absolute centered coordinate) and size
//!   by its own. The spatial aspect ratio is preserved and values land in
//!   `[-1, 1]`.
//!
//! ```
//! use pointnorm::{Dataset, Method, Record};
//! let dataset: Dataset = vec![
//!     Record::new(1., 2., 3., 10.),
//!     Record::new(3., 4., 5., 30.),
//!     Record::new(5., 6., 7., 50.),
//! ].into_iter().collect();
//!
//! let normalized = pointnorm::normalize(&dataset, Method::MinMax);
//! assert_eq!(Some(&Record::new(0., 0., 0., 0.)), normalized.first());
//! assert_eq!(Some(&Record::new(1., 1., 1., 1.)), normalized.last());
//! ```
//!
//! A field whose values are all the same can't be rescaled. By default the
//! resulting NaN or infinite values are passed through (and a warning is
//! logged); use a [Normalizer] to zero those fields or reject the dataset
//! instead:
//!
//! ```
//! use pointnorm::{Dataset, Error, Record};
//! use pointnorm::normalize::{Degenerate, Normalizer};
//! let dataset: Dataset = vec![
//!     Record::new(1., 2., 3., 10.),
//!     Record::new(1., 4., 5., 30.),
//! ].into_iter().collect();
//!
//! let normalizer = Normalizer { degenerate: Degenerate::Reject, ..Default::default() };
//! assert!(matches!(normalizer.normalize(&dataset), Err(Error::Degenerate { .. })));
//!
//! let normalizer = Normalizer { degenerate: Degenerate::Zero, ..Default::default() };
//! let normalized = normalizer.normalize(&dataset).unwrap();
//! assert_eq!(0., normalized.last().unwrap().x);
//! ```

use crate::{Dataset, Error, Field, Record, Result};
use log::warn;
use std::fmt;

/// How a dataset is rescaled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Per-field min-max scaling into `[0, 1]`.
    #[default]
    MinMax,

    /// Mean-centering, then max-abs scaling into `[-1, 1]`, with one scale
    /// shared by x, y, and z.
    CenteredMaxAbs,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Method::MinMax => write!(f, "min-max"),
            Method::CenteredMaxAbs => write!(f, "centered max-abs"),
        }
    }
}

/// Which minimum is subtracted from size during min-max scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeOrigin {
    /// The minimum size, so size lands in `[0, 1]` like the other fields.
    #[default]
    Size,

    /// The minimum z.
    ///
    /// Some older visualizations were tuned against output produced this way.
    /// Size values are then only divided by the size span, and are not
    /// guaranteed to land in `[0, 1]`.
    ZMinimum,
}

/// What to do with a field that has no spread.
///
/// A min-max field is degenerate when its minimum equals its maximum. A
/// centered field is degenerate when every centered value is zero. A field
/// with no non-NaN values, or with an infinite spread, is degenerate under
/// both methods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Degenerate {
    /// Divide anyway, producing NaN or infinite values, and log a warning.
    #[default]
    Propagate,

    /// Set the field to zero for every record.
    Zero,

    /// Fail with [Error::Degenerate].
    Reject,
}

/// The per-field offset and divisor computed from a dataset.
///
/// A normalized value is `(value - origin) / divisor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    /// Subtracted from each field.
    pub origin: Record,

    /// Divides each field after the origin is subtracted.
    pub divisor: Record,
}

impl Scale {
    /// Returns true if the divisor for this field isn't a positive, finite
    /// number.
    pub fn is_degenerate(&self, field: Field) -> bool {
        let divisor = self.divisor[field];
        !(divisor > 0. && divisor.is_finite())
    }

    /// Returns an iterator over the degenerate fields.
    pub fn degenerate_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(move |&field| self.is_degenerate(field))
    }

    /// Rescales one record.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::Record;
    /// use pointnorm::normalize::Scale;
    /// let scale = Scale {
    ///     origin: Record::new(1., 1., 1., 1.),
    ///     divisor: Record::new(2., 2., 2., 2.),
    /// };
    /// assert_eq!(Record::new(0.5, 0.5, 0.5, 0.5), scale.apply(&Record::new(2., 2., 2., 2.)));
    /// ```
    pub fn apply(&self, record: &Record) -> Record {
        record.map(|field, value| (value - self.origin[field]) / self.divisor[field])
    }

    /// Maps a rescaled record back into the units of the source dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::Record;
    /// use pointnorm::normalize::Scale;
    /// let scale = Scale {
    ///     origin: Record::new(1., 1., 1., 1.),
    ///     divisor: Record::new(2., 2., 2., 2.),
    /// };
    /// assert_eq!(Record::new(2., 2., 2., 2.), scale.invert(&Record::new(0.5, 0.5, 0.5, 0.5)));
    /// ```
    pub fn invert(&self, record: &Record) -> Record {
        record.map(|field, value| value * self.divisor[field] + self.origin[field])
    }
}

/// Normalizes datasets.
///
/// The default normalizer uses [Method::MinMax], [SizeOrigin::Size], and
/// [Degenerate::Propagate].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Normalizer {
    /// The rescaling method.
    pub method: Method,

    /// The size origin, used by [Method::MinMax] only.
    pub size_origin: SizeOrigin,

    /// The policy for fields without spread.
    pub degenerate: Degenerate,
}

impl Normalizer {
    /// Creates a normalizer for the given method with default policies.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::Method;
    /// use pointnorm::normalize::Normalizer;
    /// let normalizer = Normalizer::new(Method::CenteredMaxAbs);
    /// ```
    pub fn new(method: Method) -> Normalizer {
        Normalizer {
            method,
            ..Default::default()
        }
    }

    /// Normalizes a dataset into a new dataset.
    ///
    /// An empty dataset always normalizes to an empty dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::{Dataset, Method, Record};
    /// use pointnorm::normalize::Normalizer;
    /// let dataset: Dataset = vec![
    ///     Record::new(-1., 0., 0., 1.),
    ///     Record::new(1., 0.5, 0., 3.),
    /// ].into_iter().collect();
    /// let normalized = Normalizer::new(Method::CenteredMaxAbs).normalize(&dataset).unwrap();
    /// assert_eq!(Some(&Record::new(-1., -0.25, 0., -1.)), normalized.first());
    /// ```
    pub fn normalize(&self, dataset: &Dataset) -> Result<Dataset> {
        if dataset.is_empty() {
            return Ok(Dataset::default());
        }
        let scale = self.scale(dataset);
        if self.degenerate == Degenerate::Reject {
            if let Some(field) = scale.degenerate_fields().next() {
                return Err(Error::Degenerate {
                    field,
                    method: self.method,
                });
            }
        }
        Ok(self.rescale(dataset, &scale))
    }

    /// Computes the scale this normalizer would use for a dataset.
    ///
    /// Keep the scale around to map normalized values back with
    /// [Scale::invert].
    pub fn scale(&self, dataset: &Dataset) -> Scale {
        match self.method {
            Method::MinMax => {
                let bounds = dataset.bounds();
                let origin = Record::from_fn(|field| match (field, self.size_origin) {
                    (Field::Size, SizeOrigin::ZMinimum) => bounds.min.z,
                    _ => bounds.min[field],
                });
                Scale {
                    origin,
                    divisor: Record::from_fn(|field| bounds.span(field)),
                }
            }
            Method::CenteredMaxAbs => {
                let mean = dataset.mean();
                let max_abs = |fields: &[Field]| {
                    dataset
                        .iter()
                        .flat_map(|record| {
                            fields.iter().map(move |&field| record[field] - mean[field])
                        })
                        .filter(|value| !value.is_nan())
                        .fold(0., |max: f64, value| max.max(value.abs()))
                };
                let max_abs_xyz = max_abs(&Field::XYZ[..]);
                let max_abs_size = max_abs(&[Field::Size][..]);
                Scale {
                    origin: mean,
                    divisor: Record::new(max_abs_xyz, max_abs_xyz, max_abs_xyz, max_abs_size),
                }
            }
        }
    }

    fn rescale(&self, dataset: &Dataset, scale: &Scale) -> Dataset {
        let mut zeroed = [false; 4];
        for field in scale.degenerate_fields() {
            match self.degenerate {
                Degenerate::Zero => zeroed[field.column()] = true,
                Degenerate::Propagate | Degenerate::Reject => warn!(
                    "{} can't be rescaled under {} normalization (divisor {})",
                    field, self.method, scale.divisor[field]
                ),
            }
        }
        dataset.map(|record| {
            scale.apply(record).map(|field, value| {
                if zeroed[field.column()] && !record[field].is_nan() {
                    0.
                } else {
                    value
                }
            })
        })
    }
}

/// Normalizes a dataset with the given method and default policies.
///
/// Degenerate fields produce NaN or infinite values.
pub fn normalize(dataset: &Dataset, method: Method) -> Dataset {
    if dataset.is_empty() {
        return Dataset::default();
    }
    let normalizer = Normalizer::new(method);
    let scale = normalizer.scale(dataset);
    normalizer.rescale(dataset, &scale)
}

/// Normalizes every field into `[0, 1]` with min-max scaling.
///
/// # Examples
///
/// ```
/// use pointnorm::Dataset;
/// let normalized = pointnorm::normalize_min_max(&Dataset::default());
/// assert!(normalized.is_empty());
/// ```
pub fn normalize_min_max(dataset: &Dataset) -> Dataset {
    normalize(dataset, Method::MinMax)
}

/// Centers every field on its mean and scales into `[-1, 1]`.
pub fn normalize_centered(dataset: &Dataset) -> Dataset {
    normalize(dataset, Method::CenteredMaxAbs)
}

/// Subtracts each field's mean from every record.
///
/// # Examples
///
/// ```
/// use pointnorm::{Dataset, Record};
/// let dataset: Dataset = vec![
///     Record::new(1., 2., 3., 10.),
///     Record::new(3., 4., 5., 30.),
/// ].into_iter().collect();
/// let centered = pointnorm::normalize::center(&dataset);
/// assert_eq!(Some(&Record::new(-1., -1., -1., -10.)), centered.first());
/// ```
pub fn center(dataset: &Dataset) -> Dataset {
    let mean = dataset.mean();
    dataset.map(|record| record.map(|field, value| value - mean[field]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        vec![
            Record::new(1., 2., 3., 10.),
            Record::new(3., 4., 5., 30.),
            Record::new(5., 6., 7., 50.),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn min_max_endpoints() {
        let normalized = normalize_min_max(&dataset());
        assert_eq!(3, normalized.len());
        assert_eq!(Some(&Record::new(0., 0., 0., 0.)), normalized.first());
        assert_eq!(Record::new(0.5, 0.5, 0.5, 0.5), normalized.records()[1]);
        assert_eq!(Some(&Record::new(1., 1., 1., 1.)), normalized.last());
    }

    #[test]
    fn min_max_z_minimum_origin() {
        let normalizer = Normalizer {
            size_origin: SizeOrigin::ZMinimum,
            ..Default::default()
        };
        let normalized = normalizer.normalize(&dataset()).unwrap();
        // (10 - 3) / 40, (50 - 3) / 40
        assert_eq!(7. / 40., normalized.first().unwrap().size);
        assert_eq!(47. / 40., normalized.last().unwrap().size);
        assert_eq!(1., normalized.last().unwrap().x);
    }

    #[test]
    fn min_max_empty() {
        assert!(normalize_min_max(&Dataset::default()).is_empty());
        let normalizer = Normalizer {
            degenerate: Degenerate::Reject,
            ..Default::default()
        };
        assert!(normalizer.normalize(&Dataset::default()).unwrap().is_empty());
    }

    #[test]
    fn min_max_single_record_propagates_nan() {
        let dataset = Dataset::new(vec![Record::new(1., 2., 3., 4.)]);
        let normalized = normalize_min_max(&dataset);
        let record = normalized.first().unwrap();
        assert!(Field::ALL.iter().all(|&field| record[field].is_nan()));
    }

    #[test]
    fn min_max_constant_field_zeroed() {
        let dataset = Dataset::new(vec![Record::new(1., 2., 3., 4.), Record::new(1., 4., 5., 6.)]);
        let normalizer = Normalizer {
            degenerate: Degenerate::Zero,
            ..Default::default()
        };
        let normalized = normalizer.normalize(&dataset).unwrap();
        assert_eq!(
            vec![Record::new(0., 0., 0., 0.), Record::new(0., 1., 1., 1.)],
            normalized.into_records()
        );
    }

    #[test]
    fn min_max_constant_field_rejected() {
        let dataset = Dataset::new(vec![Record::new(1., 2., 3., 4.), Record::new(2., 2., 5., 6.)]);
        let normalizer = Normalizer {
            degenerate: Degenerate::Reject,
            ..Default::default()
        };
        match normalizer.normalize(&dataset) {
            Err(Error::Degenerate { field, method }) => {
                assert_eq!(Field::Y, field);
                assert_eq!(Method::MinMax, method);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn infinite_span_is_degenerate() {
        let dataset = Dataset::new(vec![
            Record::new(1., 2., 3., 4.),
            Record::new(5., 6., 7., 8.),
            Record::new(f64::INFINITY, 1., 1., 1.),
        ]);
        let scale = Normalizer::default().scale(&dataset);
        assert_eq!(vec![Field::X], scale.degenerate_fields().collect::<Vec<_>>());

        let normalizer = Normalizer {
            degenerate: Degenerate::Reject,
            ..Default::default()
        };
        assert!(matches!(
            normalizer.normalize(&dataset),
            Err(Error::Degenerate {
                field: Field::X,
                method: Method::MinMax
            })
        ));

        let normalizer = Normalizer {
            degenerate: Degenerate::Zero,
            ..Default::default()
        };
        let normalized = normalizer.normalize(&dataset).unwrap();
        assert!(normalized.iter().all(|record| record.x == 0.));
        assert!(normalized.iter().all(Record::is_finite));
    }

    #[test]
    fn nan_values_do_not_poison_other_records() {
        let mut records = dataset().into_records();
        records.push(Record::new(f64::NAN, 4., 5., 30.));
        let normalized = normalize_min_max(&Dataset::new(records));
        assert_eq!(Some(&Record::new(1., 1., 1., 1.)), normalized.records().get(2));
        let last = normalized.last().unwrap();
        assert!(last.x.is_nan());
        assert_eq!(0.5, last.y);
    }

    #[test]
    fn centered_shares_spatial_scale() {
        let dataset = Dataset::new(vec![
            Record::new(-2., -1., 0., 1.),
            Record::new(2., 1., 0., 3.),
        ]);
        let normalized = normalize_centered(&dataset);
        assert_eq!(
            vec![Record::new(-1., -0.5, 0., -1.), Record::new(1., 0.5, 0., 1.)],
            normalized.into_records()
        );
    }

    #[test]
    fn centered_scale() {
        let scale = Normalizer::new(Method::CenteredMaxAbs).scale(&dataset());
        assert_eq!(Record::new(3., 4., 5., 30.), scale.origin);
        assert_eq!(Record::new(2., 2., 2., 20.), scale.divisor);
        assert_eq!(0, scale.degenerate_fields().count());
    }

    #[test]
    fn centered_degenerate_spatial_axes() {
        let dataset = Dataset::new(vec![Record::new(1., 1., 1., 1.), Record::new(1., 1., 1., 3.)]);
        let normalizer = Normalizer {
            method: Method::CenteredMaxAbs,
            degenerate: Degenerate::Reject,
            ..Default::default()
        };
        assert!(matches!(
            normalizer.normalize(&dataset),
            Err(Error::Degenerate {
                field: Field::X,
                method: Method::CenteredMaxAbs
            })
        ));
        let normalized = normalize_centered(&dataset);
        assert!(normalized.first().unwrap().x.is_nan());
        assert_eq!(-1., normalized.first().unwrap().size);
    }

    #[test]
    fn centered_empty() {
        assert!(normalize_centered(&Dataset::default()).is_empty());
    }

    #[test]
    fn invert_recovers_input() {
        let dataset = dataset();
        let normalizer = Normalizer::new(Method::CenteredMaxAbs);
        let scale = normalizer.scale(&dataset);
        let normalized = normalizer.normalize(&dataset).unwrap();
        for (original, normalized) in dataset.iter().zip(normalized.iter()) {
            assert_eq!(*original, scale.invert(normalized));
        }
    }

    #[test]
    fn method_display() {
        assert_eq!("min-max", Method::MinMax.to_string());
        assert_eq!("centered max-abs", Method::CenteredMaxAbs.to_string());
    }
}
