pub mod scale;
pub(crate) mod ticks;

pub use scale::{LinearScale, LogScale, Scale};
