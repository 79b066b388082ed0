pub mod drange;

pub use drange::{DRange, DRangeEnd, DRangeNode};
