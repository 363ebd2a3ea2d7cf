pub mod model;
pub mod serialize;
pub mod types;

pub use model::DocumentModel;
pub use serialize::serialize_element;
pub use types::{Document, NodeId};
