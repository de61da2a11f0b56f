pub mod dataset;
pub mod record;
pub mod texture;

pub use dataset::{Dataset, NARRATIVE_COLUMNS, REQUIRED_COLUMNS, missing_columns};
pub use record::{Measurement, SoilRecord};
