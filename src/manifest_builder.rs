use crate::err::AssemblyError;
use crate::manifest::{Acl, Component, Legal, MANIFEST_KIND, ManifestDocument};
use crate::model::log_metadata::LogMetadata;
use crate::settings::ManifestSettings;

use log::{debug, info};

/// A parsed log together with the label (usually a path) of the input it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLog {
    pub source: String,
    pub metadata: LogMetadata,
}

impl ParsedLog {
    pub fn new(source: impl Into<String>, metadata: LogMetadata) -> Self {
        ParsedLog {
            source: source.into(),
            metadata,
        }
    }
}

pub struct ManifestBuilder<'a> {
    settings: &'a ManifestSettings,
}

impl<'a> ManifestBuilder<'a> {
    pub fn new(settings: &'a ManifestSettings) -> Self {
        ManifestBuilder { settings }
    }

    /// Builds the manifest, keeping one component per log in the order they were given.
    pub fn build(&self, logs: Vec<ParsedLog>) -> Result<ManifestDocument, AssemblyError> {
        if logs.is_empty() {
            return Err(AssemblyError::NoEntries);
        }

        let legal = Legal {
            legal_tags: to_ordered_set(self.settings.get_legal_tags()),
            other_relevant_data_countries: to_ordered_set(self.settings.get_countries()),
        };
        let acl = Acl {
            owners: to_ordered_set(self.settings.get_owners()),
            viewers: to_ordered_set(self.settings.get_viewers()),
        };

        let data_partition = self.settings.get_data_partition();
        let data: Vec<Component> = logs
            .into_iter()
            .map(|parsed| {
                let component =
                    Component::from_log(parsed.source, parsed.metadata, data_partition);
                debug!(
                    "component `{}` from {}",
                    component.resource_id, component.source
                );
                component
            })
            .collect();

        info!("assembled manifest with {} component(s)", data.len());

        Ok(ManifestDocument {
            kind: MANIFEST_KIND.to_owned(),
            legal,
            acl,
            data,
        })
    }
}

/// Builds a manifest from explicit parameters, see `ManifestBuilder::build`.
pub fn assemble<S: AsRef<str>>(
    logs: Vec<ParsedLog>,
    owners: &[S],
    viewers: &[S],
    legal_tags: &[S],
    countries: &[S],
    data_partition: &str,
) -> Result<ManifestDocument, AssemblyError> {
    let strings = |values: &[S]| values.iter().map(|v| v.as_ref().to_owned()).collect::<Vec<_>>();
    let settings = ManifestSettings::new()
        .owners(strings(owners))
        .viewers(strings(viewers))
        .legal_tags(strings(legal_tags))
        .countries(strings(countries))
        .data_partition(data_partition);

    ManifestBuilder::new(&settings).build(logs)
}

/// Trims every value, drops blanks and repeats, keeps the first-seen order.
fn to_ordered_set(values: &[String]) -> Vec<String> {
    let mut set: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if value.is_empty() || set.iter().any(|seen| seen == value) {
            continue;
        }
        set.push(value.to_owned());
    }
    set
}
