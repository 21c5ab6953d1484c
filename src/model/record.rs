use serde::{Deserialize, Serialize};

use super::metric::{Metric, MetricValue};

pub type RecordCount = u64;

/// Metrics extracted from a single benchmark result file.
///
/// A metric is `None` when its label was not found in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    record_count: RecordCount,
    phases_actual: Option<MetricValue>,
    phases_theory: Option<MetricValue>,
    disk_accesses_practice: Option<MetricValue>,
    disk_accesses_theory: Option<MetricValue>,
}

impl Record {
    pub fn new(
        record_count: RecordCount,
        phases_actual: Option<MetricValue>,
        phases_theory: Option<MetricValue>,
        disk_accesses_practice: Option<MetricValue>,
        disk_accesses_theory: Option<MetricValue>,
    ) -> Self {
        Self {
            record_count,
            phases_actual,
            phases_theory,
            disk_accesses_practice,
            disk_accesses_theory,
        }
    }

    #[inline]
    pub fn record_count(&self) -> RecordCount {
        self.record_count
    }

    #[inline]
    pub fn phases_actual(&self) -> Option<MetricValue> {
        self.phases_actual
    }

    #[inline]
    pub fn phases_theory(&self) -> Option<MetricValue> {
        self.phases_theory
    }

    #[inline]
    pub fn disk_accesses_practice(&self) -> Option<MetricValue> {
        self.disk_accesses_practice
    }

    #[inline]
    pub fn disk_accesses_theory(&self) -> Option<MetricValue> {
        self.disk_accesses_theory
    }

    pub fn metric(&self, metric: Metric) -> Option<MetricValue> {
        match metric {
            Metric::PhasesActual => self.phases_actual,
            Metric::PhasesTheory => self.phases_theory,
            Metric::DiskAccessesPractice => self.disk_accesses_practice,
            Metric::DiskAccessesTheory => self.disk_accesses_theory,
        }
    }
}
