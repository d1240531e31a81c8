use crate::err::{ParseError, ParseResult};
use crate::model::log_metadata::LogMetadata;
use crate::model::xml::{ElementId, XmlDocument, XmlElement};
use crate::tree_builder::build_tree;
use crate::utils::{normalize, parse_timestamp};

use log::{debug, trace};

/// Namespace of WITSML 1.x documents.
pub const WITSML_NAMESPACE: &str = "http://www.witsml.org/schemas/1series";

/// How an element name is matched while searching the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLookup {
    /// Namespace URI and local name must both match.
    Namespaced(&'static str),
    /// The qualified name, as written in the document, must match.
    Unqualified,
}

impl NameLookup {
    pub fn matches(self, element: &XmlElement, name: &str) -> bool {
        match self {
            NameLookup::Namespaced(namespace) => element.is_named(namespace, name),
            NameLookup::Unqualified => element.qualified_name == name,
        }
    }
}

/// Strategies are tried in order, the first one that finds anything wins.
const LOOKUP_STRATEGIES: [NameLookup; 2] = [
    NameLookup::Namespaced(WITSML_NAMESPACE),
    NameLookup::Unqualified,
];

fn find_first<'a>(
    candidates: impl Iterator<Item = (ElementId, &'a XmlElement)> + Clone,
    name: &str,
) -> Option<(ElementId, &'a XmlElement)> {
    LOOKUP_STRATEGIES.iter().find_map(|strategy| {
        candidates
            .clone()
            .find(|(_, element)| strategy.matches(element, name))
    })
}

/// Parses a WITSML log document into `LogMetadata`.
pub struct WitsmlLogParser<'a> {
    document: &'a XmlDocument,
    log: ElementId,
}

impl<'a> WitsmlLogParser<'a> {
    pub fn new(document: &'a XmlDocument) -> ParseResult<Self> {
        let (log, _) = find_first(document.iter(), "log").ok_or(ParseError::MissingLogElement)?;
        Ok(WitsmlLogParser { document, log })
    }

    fn log_element(&self) -> &'a XmlElement {
        &self.document.elements[self.log]
    }

    /// The `version` attribute of the document root, unless blank.
    pub fn schema_version(&self) -> Option<String> {
        self.document
            .root()
            .attribute("version")
            .filter(|version| !version.trim().is_empty())
            .map(str::to_owned)
    }

    /// Trimmed text of the first descendant of `<log>` called `name`.
    pub fn child_text(&self, name: &str) -> Option<String> {
        let text = find_first(self.document.descendants(self.log), name)
            .and_then(|(_, element)| normalize(Some(element.text.as_str())));
        if text.is_none() {
            trace!("`{}` is missing or blank", name);
        }
        text
    }

    /// Raw attribute of the `<log>` element, empty when the attribute is missing.
    pub fn log_attribute(&self, name: &str) -> String {
        self.log_element()
            .attribute(name)
            .unwrap_or_default()
            .to_owned()
    }

    pub fn metadata(&self) -> LogMetadata {
        let metadata = LogMetadata {
            uid: self.log_attribute("uid"),
            well_uid: self.log_attribute("uidWell"),
            wellbore_uid: self.log_attribute("uidWellbore"),
            name: self.child_text("name"),
            well_name: self.child_text("nameWell"),
            wellbore_name: self.child_text("nameWellbore"),
            service_company: self.child_text("serviceCompany"),
            run_number: self.child_text("runNumber"),
            index_type: self.child_text("indexType"),
            start_index: self.child_text("startIndex"),
            end_index: self.child_text("endIndex"),
            schema_version: self.schema_version(),
            creation_time: parse_timestamp(self.child_text("dateCreation").as_deref()),
            last_change_time: parse_timestamp(self.child_text("dateTimeLastChange").as_deref()),
        };

        debug!(
            "extracted log uid=`{}` name={:?} schema={:?}",
            metadata.uid, metadata.name, metadata.schema_version
        );
        metadata
    }
}

/// Extracts the metadata of the first `<log>` in `xml`.
pub fn extract(xml: &[u8]) -> ParseResult<LogMetadata> {
    let document = build_tree(xml)?;
    let parser = WitsmlLogParser::new(&document)?;
    Ok(parser.metadata())
}
