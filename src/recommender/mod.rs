pub mod dataset;
pub mod engine;

pub use dataset::{DatasetRow, load_dataset};
pub use engine::{Profile, Recommender};
