mod dataset;
mod earthquake;
mod location;
mod shelter;
mod source;

pub use dataset::Dataset;
pub use earthquake::Earthquake;
pub use location::Location;
pub use shelter::Shelter;
pub use source::{DataSource, DiskSource, MemSource};
