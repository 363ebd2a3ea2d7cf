mod defaults;
mod types;

pub use types::TocConfig;
