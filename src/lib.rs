#![deny(unused_must_use)]
#![forbid(unsafe_code)]
//! Converts WITSML well-log XML documents into a single OSDU `WorkProductComponent` manifest.
//!
//! ```no_run
//! use witsml_manifest::{LogSource, ManifestSettings, generate_manifest};
//!
//! let bytes = std::fs::read("samples/gamma_ray.xml").unwrap();
//! let settings = ManifestSettings::new().data_partition("com.mycompany");
//! let manifest = generate_manifest(&[LogSource::new("samples/gamma_ray.xml", bytes)], &settings).unwrap();
//! println!("{}", manifest.to_json_pretty().unwrap());
//! ```

pub use batch::{LogSource, extract_all, generate_manifest};
pub use err::{AssemblyError, ManifestError, ParseError};
pub use log_parser::{NameLookup, WITSML_NAMESPACE, WitsmlLogParser, extract};
pub use manifest::{
    Acl, Component, DatasetProperties, LOG_RESOURCE_TYPE, Legal, MANIFEST_KIND, ManifestDocument,
};
pub use manifest_builder::{ManifestBuilder, ParsedLog, assemble};
pub use model::{LogMetadata, XmlDocument, XmlElement};
pub use settings::ManifestSettings;
pub use tree_builder::build_tree;
pub use utils::{format_timestamp, normalize, parse_timestamp, split_list};

mod batch;
pub mod err;
mod log_parser;
mod manifest;
mod manifest_builder;
pub mod model;
pub mod settings;
mod tree_builder;
mod utils;
