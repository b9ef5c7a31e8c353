//! Neutral XML node representation used by tree exports
//!
//! Exporters implement `XmlNodable`; consumers observe the export through an
//! `XmlNodableContext`.

pub mod id_generator;
pub mod nodable;
pub mod node;

pub use id_generator::{get_document_id, IdAssigningContext, IdGenerator, ID_ATTRIBUTE};
pub use nodable::{CountingContext, XmlNodable, XmlNodableContext};
pub use node::XmlNode;
