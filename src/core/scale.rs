use crate::core::ticks::{
    linear_ticks, log_ladder_ticks, nice_bounds, nice_log_bounds,
};
use crate::error::{DimensionError, DimensionResult};
use serde::{Deserialize, Serialize};

/// Tick count used when rounding domains to nice bounds.
pub(crate) const NICE_TICK_COUNT: usize = 10;

/// Affine value-to-output mapping over an explicit domain and range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Creates a scale from explicit domain and range pairs.
    ///
    /// Equal bounds are allowed: a degenerate domain maps every value to the
    /// range start, and a degenerate range inverts every output to the
    /// domain start.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> DimensionResult<Self> {
        validate_bounds(domain)?;
        validate_bounds(range)?;
        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Constructor for bounds known finite at the call site, such as the
    /// unit defaults a dimension starts from.
    pub(crate) const fn from_parts(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn set_domain(&mut self, start: f64, end: f64) -> DimensionResult<()> {
        validate_bounds((start, end))?;
        self.domain_start = start;
        self.domain_end = end;
        Ok(())
    }

    pub fn set_range(&mut self, start: f64, end: f64) -> DimensionResult<()> {
        validate_bounds((start, end))?;
        self.range_start = start;
        self.range_end = end;
        Ok(())
    }

    /// Rounds the domain outward to tick-step multiples, preserving a
    /// reversed direction. The range is never touched.
    pub fn nice(&mut self) {
        let (start, end) = nice_bounds(self.domain_start, self.domain_end, NICE_TICK_COUNT);
        self.domain_start = start;
        self.domain_end = end;
    }

    /// Maps a domain value onto the range. NaN input propagates.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return self.range_start;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps an output value back onto the domain.
    #[must_use]
    pub fn invert(self, output: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (output - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Round tick values inside the domain, direction-preserving.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain_start, self.domain_end, count)
    }
}

/// Base-10 logarithmic value-to-output mapping.
///
/// The mapping is only meaningful over strictly positive values and domain
/// bounds. Outside that region `apply` yields NaN instead of erroring, the
/// same undefined behavior a log plot surface exhibits when fed zero or
/// negative data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LogScale {
    /// Creates a scale from explicit domain and range pairs.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> DimensionResult<Self> {
        validate_bounds(domain)?;
        validate_bounds(range)?;
        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    pub(crate) const fn from_parts(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn set_domain(&mut self, start: f64, end: f64) -> DimensionResult<()> {
        validate_bounds((start, end))?;
        self.domain_start = start;
        self.domain_end = end;
        Ok(())
    }

    pub fn set_range(&mut self, start: f64, end: f64) -> DimensionResult<()> {
        validate_bounds((start, end))?;
        self.range_start = start;
        self.range_end = end;
        Ok(())
    }

    /// Rounds the domain outward to whole decades. Domains with a
    /// non-positive bound are left unchanged.
    pub fn nice(&mut self) {
        let (start, end) = nice_log_bounds(self.domain_start, self.domain_end);
        self.domain_start = start;
        self.domain_end = end;
    }

    /// Maps a domain value onto the range. Non-positive values and domains
    /// touching zero yield NaN; a domain collapsing in log space maps every
    /// value to the range start.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        if value <= 0.0 {
            return f64::NAN;
        }
        let log_start = self.domain_start.log10();
        let log_span = self.domain_end.log10() - log_start;
        if log_span == 0.0 {
            return self.range_start;
        }
        if !log_span.is_finite() {
            return f64::NAN;
        }
        let normalized = (value.log10() - log_start) / log_span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps an output value back onto the domain.
    #[must_use]
    pub fn invert(self, output: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let log_start = self.domain_start.log10();
        let log_span = self.domain_end.log10() - log_start;
        let normalized = (output - self.range_start) / span;
        10_f64.powf(log_start + normalized * log_span)
    }

    /// The sub-decade ladder clamped to the domain. Requested tick counts do
    /// not thin the ladder; label policies handle density instead.
    #[must_use]
    pub fn ticks(self) -> Vec<f64> {
        log_ladder_ticks(self.domain_start, self.domain_end)
    }
}

/// Read view over whichever scale a dimension currently evaluates with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scale {
    Linear(LinearScale),
    Log(LogScale),
}

impl Scale {
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Linear(scale) => scale.apply(value),
            Self::Log(scale) => scale.apply(value),
        }
    }

    #[must_use]
    pub fn invert(self, output: f64) -> f64 {
        match self {
            Self::Linear(scale) => scale.invert(output),
            Self::Log(scale) => scale.invert(output),
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        match self {
            Self::Linear(scale) => scale.domain(),
            Self::Log(scale) => scale.domain(),
        }
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Linear(scale) => scale.range(),
            Self::Log(scale) => scale.range(),
        }
    }

    /// Tick values for the scale. Log scales emit their full ladder and
    /// ignore `count`.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(scale) => scale.ticks(count),
            Self::Log(scale) => scale.ticks(),
        }
    }

    #[must_use]
    pub fn is_log(self) -> bool {
        matches!(self, Self::Log(_))
    }
}

fn validate_bounds(bounds: (f64, f64)) -> DimensionResult<()> {
    if !bounds.0.is_finite() || !bounds.1.is_finite() {
        return Err(DimensionError::InvalidBounds {
            start: bounds.0,
            end: bounds.1,
        });
    }
    Ok(())
}
