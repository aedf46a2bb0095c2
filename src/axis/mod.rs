//! Axis presentation config and tick assembly.

pub mod label_format;

pub use label_format::{
    DEFAULT_SIGNIFICANT_DIGITS, TickLabelPolicy, format_general, format_scientific,
    log_decade_label,
};

use serde::{Deserialize, Serialize};

use crate::core::Scale;

/// Rendering configuration for one chart axis.
///
/// This type is serializable so host applications can persist/load axis setup
/// without inventing their own ad-hoc format. A negative `tick_size` projects
/// ticks across the plot, which is how gridlines are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    tick_count: usize,
    tick_padding: f64,
    tick_size: f64,
    label_policy: TickLabelPolicy,
}

impl Axis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    #[must_use]
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    #[must_use]
    pub fn with_label_policy(mut self, label_policy: TickLabelPolicy) -> Self {
        self.label_policy = label_policy;
        self
    }

    pub fn set_tick_count(&mut self, tick_count: usize) {
        self.tick_count = tick_count;
    }

    pub fn set_tick_padding(&mut self, tick_padding: f64) {
        self.tick_padding = tick_padding;
    }

    pub fn set_tick_size(&mut self, tick_size: f64) {
        self.tick_size = tick_size;
    }

    pub fn set_label_policy(&mut self, label_policy: TickLabelPolicy) {
        self.label_policy = label_policy;
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    #[must_use]
    pub fn tick_padding(&self) -> f64 {
        self.tick_padding
    }

    #[must_use]
    pub fn tick_size(&self) -> f64 {
        self.tick_size
    }

    #[must_use]
    pub fn label_policy(&self) -> TickLabelPolicy {
        self.label_policy
    }

    /// Label text for a single tick value under the current policy.
    #[must_use]
    pub fn label(&self, value: f64) -> String {
        self.label_policy.label(value)
    }

    /// Positioned, labeled ticks for the given scale.
    ///
    /// The tick count is advisory: linear scales honor it, log scales emit
    /// their full ladder and rely on the label policy to keep the axis
    /// readable.
    #[must_use]
    pub fn ticks(&self, scale: Scale) -> Vec<AxisTick> {
        scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| AxisTick {
                value,
                offset: scale.apply(value),
                label: self.label(value),
            })
            .collect()
    }
}

impl Default for Axis {
    /// d3 axis defaults: 10 ticks, padding 3, tick size 6, general labels.
    fn default() -> Self {
        Self {
            tick_count: 10,
            tick_padding: 3.0,
            tick_size: 6.0,
            label_policy: TickLabelPolicy::default(),
        }
    }
}

/// One tick on a rendered axis: the domain value, its output-space offset,
/// and its label text (possibly empty under a filtering policy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub offset: f64,
    pub label: String,
}
