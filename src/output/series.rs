use crate::model::{Metric, MetricValue, Record, RecordCount};

/// Column-wise view of records sorted by record count.
///
/// All columns have the same length and index `i` of every column belongs to
/// the same record.
#[derive(Debug, Default, PartialEq)]
pub struct Series {
    record_counts: Vec<RecordCount>,
    phases_actual: Vec<Option<MetricValue>>,
    phases_theory: Vec<Option<MetricValue>>,
    disk_accesses_practice: Vec<Option<MetricValue>>,
    disk_accesses_theory: Vec<Option<MetricValue>>,
}

impl Series {
    /// Sorts `records` in place by record count (stable) and projects them.
    pub fn project(records: &mut [Record]) -> Self {
        records.sort_by_key(|r| r.record_count());

        let mut series = Self::default();
        for record in records.iter() {
            series.record_counts.push(record.record_count());
            series.phases_actual.push(record.phases_actual());
            series.phases_theory.push(record.phases_theory());
            series
                .disk_accesses_practice
                .push(record.disk_accesses_practice());
            series
                .disk_accesses_theory
                .push(record.disk_accesses_theory());
        }
        series
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.record_counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.record_counts.is_empty()
    }

    #[inline]
    pub fn record_counts(&self) -> &[RecordCount] {
        &self.record_counts
    }

    pub fn values(&self, metric: Metric) -> &[Option<MetricValue>] {
        match metric {
            Metric::PhasesActual => &self.phases_actual,
            Metric::PhasesTheory => &self.phases_theory,
            Metric::DiskAccessesPractice => &self.disk_accesses_practice,
            Metric::DiskAccessesTheory => &self.disk_accesses_theory,
        }
    }

    /// (record count, value) pairs of one metric, aligned with `record_counts`.
    pub fn points(&self, metric: Metric) -> Vec<(f64, Option<MetricValue>)> {
        self.record_counts
            .iter()
            .zip(self.values(metric))
            .map(|(x, y)| (*x as f64, *y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(count: RecordCount, phases: f64) -> Record {
        Record::new(count, Some(phases), None, None, None)
    }

    #[test]
    fn test_project_sorts_by_record_count() {
        let mut records = vec![record(500, 1.0), record(100, 2.0), record(1000, 3.0)];
        let series = Series::project(&mut records);

        assert_eq!(series.record_counts(), &[100, 500, 1000]);
        assert_eq!(
            series.values(Metric::PhasesActual),
            &[Some(2.0), Some(1.0), Some(3.0)]
        );
        assert_eq!(series.values(Metric::PhasesTheory), &[None, None, None]);
        assert_eq!(records[0].record_count(), 100);
    }

    #[test]
    fn test_project_keeps_duplicates_in_input_order() {
        let mut records = vec![record(10, 1.0), record(5, 2.0), record(10, 3.0)];
        let series = Series::project(&mut records);

        assert_eq!(series.len(), 3);
        assert_eq!(series.record_counts(), &[5, 10, 10]);
        assert_eq!(
            series.values(Metric::PhasesActual),
            &[Some(2.0), Some(1.0), Some(3.0)]
        );
    }

    #[test]
    fn test_points() {
        let mut records = vec![
            Record::new(1000, None, None, Some(900.0), Some(850.0)),
            Record::new(100, None, None, Some(200.0), None),
        ];
        let series = Series::project(&mut records);

        assert_eq!(
            series.points(Metric::DiskAccessesTheory),
            vec![(100.0, None), (1000.0, Some(850.0))]
        );
    }

    #[test]
    fn test_project_empty() {
        let series = Series::project(&mut []);
        assert!(series.is_empty());
    }
}
