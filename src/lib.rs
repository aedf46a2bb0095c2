//! plot-dimension: value-to-coordinate mapping for chart axes.
//!
//! A [`ValueDimension`] maps numeric data values onto output coordinates
//! along one axis, with linear and base-10 logarithmic modes, nice-bound
//! rounding, range inversion, and axis tick formatting (including the
//! decade-filtered labels a readable log axis needs).
//!
//! # Example
//! ```
//! use plot_dimension::{Axis, ValueDimension};
//!
//! let mut dimension = ValueDimension::new();
//! dimension.set_domain(0.0, 100.0)?;
//! dimension.set_range(480.0, 0.0)?;
//!
//! let mut axis = Axis::new();
//! dimension.format(&mut axis, 640.0);
//! for tick in axis.ticks(dimension.scale()) {
//!     println!("{:>8} at {:.1}px", tick.label, tick.offset);
//! }
//! # Ok::<(), plot_dimension::DimensionError>(())
//! ```

pub mod axis;
pub mod core;
pub mod dimension;
pub mod error;
pub mod telemetry;

pub use axis::{Axis, AxisTick, TickLabelPolicy};
pub use core::{LinearScale, LogScale, Scale};
pub use dimension::ValueDimension;
pub use error::{DimensionError, DimensionResult};
