use std::fmt;

pub type MetricValue = f64;

/// One of the numeric fields reported by the sort benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    PhasesActual,
    PhasesTheory,
    DiskAccessesPractice,
    DiskAccessesTheory,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::PhasesActual,
        Metric::PhasesTheory,
        Metric::DiskAccessesPractice,
        Metric::DiskAccessesTheory,
    ];

    /// The exact text preceding the value in a result file.
    ///
    /// The theory disk access label has no space after the colon. This is how
    /// the benchmark prints it, and existing result files depend on it.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::PhasesActual => "Phases Needed Actual: ",
            Metric::PhasesTheory => "Phases Needed Theory: ",
            Metric::DiskAccessesPractice => "Disk accesses in practice: ",
            Metric::DiskAccessesTheory => "Disk accesses in theory:",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::PhasesActual => "phases_actual",
            Metric::PhasesTheory => "phases_theory",
            Metric::DiskAccessesPractice => "disk_accesses_practice",
            Metric::DiskAccessesTheory => "disk_accesses_theory",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
