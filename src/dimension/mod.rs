//! The value dimension: a stateful mapping from domain data values onto
//! output coordinates along one chart axis.

mod json_contract;

pub use json_contract::{VALUE_DIMENSION_JSON_SCHEMA_V1, ValueDimensionJsonContractV1};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::axis::{Axis, TickLabelPolicy};
use crate::core::{LinearScale, LogScale, Scale};
use crate::error::DimensionResult;

/// Tick count `format` requests in linear mode.
const LINEAR_TICK_COUNT: usize = 10;
/// Tick count `format` requests in log mode. Advisory only: the log scale
/// emits its full ladder and the decade label policy filters instead.
const LOG_TICK_COUNT: usize = 1;
/// Tick padding `format` applies in both modes.
const FORMAT_TICK_PADDING: f64 = 10.0;
/// Relative widening applied to each bound of a degenerate domain.
const DEGENERATE_DOMAIN_WIDENING: f64 = 0.1;

/// Maps numeric domain values onto an output range (nominally `[0, 1]`,
/// remappable to pixels) along one chart axis.
///
/// A dimension keeps a linear and a base-10 logarithmic scale in lockstep:
/// every domain and range update is applied to both, and a mode flag selects
/// which one [`evaluate`](Self::evaluate) delegates to. Switching modes is
/// therefore free and never loses the configured bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDimension {
    flip_range: bool,
    log_active: bool,
    linear: LinearScale,
    log: LogScale,
}

impl ValueDimension {
    /// Creates a dimension with domain `[0, 1]`, range `[1, 0]`, in linear
    /// mode, without range flipping.
    #[must_use]
    pub fn new() -> Self {
        Self::with_flipped_range(false)
    }

    /// Creates a dimension that reverses the visual direction of every
    /// domain it is given. The flag is fixed for the dimension's lifetime.
    #[must_use]
    pub fn with_flipped_range(flip_range: bool) -> Self {
        let mut linear = LinearScale::from_parts((0.0, 1.0), (1.0, 0.0));
        linear.nice();
        let mut log = LogScale::from_parts((0.0, 1.0), (1.0, 0.0));
        log.nice();
        Self {
            flip_range,
            log_active: false,
            linear,
            log,
        }
    }

    /// Maps a domain value through the active scale. Pure delegation: NaN
    /// propagation and degenerate-domain behavior are the scale layer's.
    #[must_use]
    pub fn evaluate(&self, value: f64) -> f64 {
        if self.log_active {
            self.log.apply(value)
        } else {
            self.linear.apply(value)
        }
    }

    /// Sets the data domain on both internal scales, rounded to nice bounds.
    ///
    /// A degenerate domain (`min == max`) is widened by 10% of the shared
    /// value on each side before it is applied; at zero that widening is a
    /// no-op and the degenerate domain stands (the scales then map every
    /// value to the range start). With `flip_range` set, the bounds are
    /// swapped before applying so the visual direction reverses regardless
    /// of data order.
    ///
    /// Errs only on non-finite bounds, in which case neither scale changes.
    pub fn set_domain(&mut self, min: f64, max: f64) -> DimensionResult<()> {
        let (mut min, mut max) = (min, max);
        if min == max {
            if min == 0.0 {
                warn!("degenerate zero domain cannot be widened; every value maps to range start");
            }
            min -= DEGENERATE_DOMAIN_WIDENING * min;
            max += DEGENERATE_DOMAIN_WIDENING * max;
        }
        if self.flip_range {
            std::mem::swap(&mut min, &mut max);
        }

        debug!(min, max, flip = self.flip_range, "set dimension domain");
        self.linear.set_domain(min, max)?;
        self.log.set_domain(min, max)?;
        self.linear.nice();
        self.log.nice();
        Ok(())
    }

    /// Sets the output range on both internal scales and re-nices each
    /// domain. Range values are stored exactly (they represent layout
    /// space); flipping never applies here, only in [`set_domain`](Self::set_domain).
    pub fn set_range(&mut self, min: f64, max: f64) -> DimensionResult<()> {
        debug!(min, max, "set dimension range");
        self.linear.set_range(min, max)?;
        self.log.set_range(min, max)?;
        self.linear.nice();
        self.log.nice();
        Ok(())
    }

    /// The currently active scale, for direct use by axis-rendering code.
    #[must_use]
    pub fn scale(&self) -> Scale {
        if self.log_active {
            Scale::Log(self.log)
        } else {
            Scale::Linear(self.linear)
        }
    }

    /// This dimension is never categorical.
    #[must_use]
    pub fn is_ordinal(&self) -> bool {
        false
    }

    /// Writes this dimension's tick configuration onto an axis: tick count
    /// and label policy per the current mode, padding 10, and tick size
    /// `-plot_span` so ticks project across the plot as gridlines.
    ///
    /// Returns `&self` for fluent chaining. Call again after every mode
    /// switch or re-render.
    pub fn format<'a>(&'a self, axis: &mut Axis, plot_span: f64) -> &'a Self {
        if self.log_active {
            axis.set_tick_count(LOG_TICK_COUNT);
            axis.set_tick_padding(FORMAT_TICK_PADDING);
            axis.set_tick_size(-plot_span);
            axis.set_label_policy(TickLabelPolicy::LogDecades);
        } else {
            axis.set_tick_count(LINEAR_TICK_COUNT);
            axis.set_tick_padding(FORMAT_TICK_PADDING);
            axis.set_tick_size(-plot_span);
            axis.set_label_policy(TickLabelPolicy::General {
                significant_digits: crate::axis::DEFAULT_SIGNIFICANT_DIGITS,
            });
        }
        self
    }

    /// Switches between linear and logarithmic evaluation. No recomputation
    /// happens here; the caller re-invokes [`format`](Self::format) and
    /// re-renders.
    pub fn set_log_scale(&mut self, use_log: bool) {
        debug!(use_log, "set dimension log mode");
        self.log_active = use_log;
    }

    #[must_use]
    pub fn is_log_scale(&self) -> bool {
        self.log_active
    }

    #[must_use]
    pub fn flip_range(&self) -> bool {
        self.flip_range
    }
}

impl Default for ValueDimension {
    fn default() -> Self {
        Self::new()
    }
}
