use predprey_core::Snapshot;

use crate::model::{Census, Growth};

/// One sample of a simulated run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub time: f64,
    pub prey: f64,
    pub predator: f64,
}

/// The sampled trajectory of one simulation, in time order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    records: Vec<Record>,
}

impl TimeSeries {
    /// Wraps records that are already in time order.
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub(crate) fn from_history(history: &[Snapshot<Census, Growth>]) -> Self {
        let records = history
            .iter()
            .map(|snapshot| {
                let census = &snapshot.input;
                Record {
                    time: census.time,
                    prey: census.populations.prey,
                    predator: census.populations.predator,
                }
            })
            .collect();
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn times(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.time)
    }

    pub fn prey(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.prey)
    }

    pub fn predator(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.predator)
    }

    /// Iterates over `[prey, predator]` pairs, the phase-plane trajectory.
    pub fn phase(&self) -> impl ExactSizeIterator<Item = [f64; 2]> + '_ {
        self.records.iter().map(|r| [r.prey, r.predator])
    }

    /// Returns `true` if no population ever overflowed or became NaN.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.records
            .iter()
            .all(|r| r.prey.is_finite() && r.predator.is_finite())
    }

    /// Summarizes both populations, or `None` for an empty series.
    #[must_use]
    pub fn summary(&self) -> Option<Summary> {
        let last = self.last()?;
        Some(Summary {
            end_time: last.time,
            prey: Extremes::of(self.prey())?,
            predator: Extremes::of(self.predator())?,
        })
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Smallest, largest and final value of one population.
///
/// NaN samples are ignored by `min` and `max` but may still be `last`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes {
    pub min: f64,
    pub max: f64,
    pub last: f64,
}

impl Extremes {
    fn of(mut values: impl Iterator<Item = f64>) -> Option<Self> {
        let first = values.next()?;
        Some(values.fold(
            Self {
                min: first,
                max: first,
                last: first,
            },
            |acc, value| Self {
                min: acc.min.min(value),
                max: acc.max.max(value),
                last: value,
            },
        ))
    }
}

/// Headline numbers of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub end_time: f64,
    pub prey: Extremes,
    pub predator: Extremes,
}
