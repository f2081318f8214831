//! Ordered collections of records.

use crate::{Bounds, Field, Record};
use std::slice;

/// An ordered sequence of [Record]s loaded from one source.
///
/// Normalization never changes a dataset in place; it always builds a new one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from records.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::{Dataset, Record};
    /// let dataset = Dataset::new(vec![Record::new(1., 2., 3., 4.)]);
    /// assert_eq!(1, dataset.len());
    /// ```
    pub fn new(records: Vec<Record>) -> Dataset {
        Dataset { records }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records as a slice.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the dataset, returning its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns the first record, if any.
    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    /// Returns the last record, if any.
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Calculates the per-field minimum and maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::{Dataset, Record};
    /// let dataset: Dataset = vec![
    ///     Record::new(1., 2., 3., 10.),
    ///     Record::new(5., 6., 7., 50.),
    /// ].into_iter().collect();
    /// let bounds = dataset.bounds();
    /// assert_eq!(1., bounds.min.x);
    /// assert_eq!(50., bounds.max.size);
    /// ```
    pub fn bounds(&self) -> Bounds {
        self.records.iter().collect()
    }

    /// Calculates the per-field arithmetic mean.
    ///
    /// NaN values are left out of both the sum and the count. A field with no
    /// usable values (including every field of an empty dataset) has a NaN mean.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::{Dataset, Record};
    /// let dataset: Dataset = vec![
    ///     Record::new(1., 2., 3., 10.),
    ///     Record::new(3., 4., 5., 30.),
    /// ].into_iter().collect();
    /// assert_eq!(Record::new(2., 3., 4., 20.), dataset.mean());
    /// ```
    pub fn mean(&self) -> Record {
        Record::from_fn(|field| {
            let (sum, count) = self
                .values(field)
                .filter(|value| !value.is_nan())
                .fold((0., 0usize), |(sum, count), value| (sum + value, count + 1));
            if count == 0 {
                f64::NAN
            } else {
                sum / count as f64
            }
        })
    }

    /// Returns an iterator over one field of every record.
    pub fn values(&self, field: Field) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |record| record[field])
    }

    /// Builds a new dataset by applying `f` to every record.
    pub fn map<F: FnMut(&Record) -> Record>(&self, f: F) -> Dataset {
        self.records.iter().map(f).collect()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Dataset {
        Dataset::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Dataset {
        Dataset::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Dataset {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
