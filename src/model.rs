pub mod log_metadata;
pub mod xml;

pub use self::log_metadata::LogMetadata;
pub use self::xml::{ElementId, XmlAttribute, XmlDocument, XmlElement};
