//! The [`MetricPrefix`] reporting unit and its label/conversion lookup.

/// Denomination used when reporting a measurement.
///
/// Purely a presentation concern: samples are always stored in nanoseconds and converted on
/// read, dividing by 1000 per unit step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricPrefix {
    Milli,
    Micro,
    Nano,
}

impl MetricPrefix {
    /// The number of supported prefixes.
    pub const COUNT: usize = 3;

    /// Returns the prefix name as a word, as used in report lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Milli => "milli",
            Self::Micro => "micro",
            Self::Nano => "nano",
        }
    }

    /// Converts a nanosecond value into this prefix's denomination.
    pub fn from_nanoseconds(self, nanos: f64) -> f64 {
        match self {
            Self::Milli => nanos / 1000.0 / 1000.0,
            Self::Micro => nanos / 1000.0,
            Self::Nano => nanos,
        }
    }
}
