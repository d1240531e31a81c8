pub use crate::model::log_metadata::DEFAULT_DATA_PARTITION;

pub const DEFAULT_OWNER: &str = "data.default.owner@osdu";
pub const DEFAULT_VIEWER: &str = "data.default.viewer@osdu";
pub const DEFAULT_LEGAL_TAG: &str = "osdu-default-legaltag";
pub const DEFAULT_COUNTRY: &str = "US";

/// Manifest-wide parameters, plus how many threads to extract with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSettings {
    owners: Vec<String>,
    viewers: Vec<String>,
    legal_tags: Vec<String>,
    countries: Vec<String>,
    data_partition: String,
    num_threads: usize,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        ManifestSettings {
            owners: vec![DEFAULT_OWNER.to_owned()],
            viewers: vec![DEFAULT_VIEWER.to_owned()],
            legal_tags: vec![DEFAULT_LEGAL_TAG.to_owned()],
            countries: vec![DEFAULT_COUNTRY.to_owned()],
            data_partition: DEFAULT_DATA_PARTITION.to_owned(),
            num_threads: 0,
        }
    }
}

impl ManifestSettings {
    pub fn new() -> Self {
        ManifestSettings::default()
    }

    pub fn owners<I, S>(mut self, owners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.owners = owners.into_iter().map(Into::into).collect();
        self
    }

    pub fn viewers<I, S>(mut self, viewers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.viewers = viewers.into_iter().map(Into::into).collect();
        self
    }

    pub fn legal_tags<I, S>(mut self, legal_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legal_tags = legal_tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn data_partition(mut self, data_partition: impl Into<String>) -> Self {
        self.data_partition = data_partition.into();
        self
    }

    /// Sets the number of worker threads, `0` means use all available CPUs.
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = if cfg!(feature = "multithreading") {
            num_threads
        } else {
            1
        };
        self
    }

    pub fn get_owners(&self) -> &[String] {
        &self.owners
    }

    pub fn get_viewers(&self) -> &[String] {
        &self.viewers
    }

    pub fn get_legal_tags(&self) -> &[String] {
        &self.legal_tags
    }

    pub fn get_countries(&self) -> &[String] {
        &self.countries
    }

    pub fn get_data_partition(&self) -> &str {
        &self.data_partition
    }

    pub fn get_num_threads(&self) -> usize {
        self.num_threads
    }
}
