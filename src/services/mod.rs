// Service exports
pub mod loader;
pub mod report;

pub use loader::{
    load_dataset, parse_dataset, prepare_dataset, DatasetError, DatasetFormat, LoadStats,
};
pub use report::{render, render_text};
