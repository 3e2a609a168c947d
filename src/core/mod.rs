pub mod color;
pub mod constants;
pub mod geo;
pub mod interpolation;
pub mod options;

pub use color::{ChartColors, Color};
pub use geo::{PointF, SizeF};
pub use interpolation::Interpolation;
pub use options::MapOptions;
