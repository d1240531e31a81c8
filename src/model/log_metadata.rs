use jiff::Timestamp;

pub const DEFAULT_DATA_PARTITION: &str = "osdu";
pub const UNKNOWN_UID: &str = "unknown";

/// Normalized metadata of a single WITSML `<log>`.
///
/// Identifiers are kept exactly as they appear in the source attributes (a missing attribute is
/// an empty string). Every other textual field is either `None` or a trimmed, non-blank string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogMetadata {
    pub uid: String,
    pub well_uid: String,
    pub wellbore_uid: String,
    pub name: Option<String>,
    pub well_name: Option<String>,
    pub wellbore_name: Option<String>,
    pub service_company: Option<String>,
    pub run_number: Option<String>,
    pub index_type: Option<String>,
    pub start_index: Option<String>,
    pub end_index: Option<String>,
    pub schema_version: Option<String>,
    pub creation_time: Option<Timestamp>,
    pub last_change_time: Option<Timestamp>,
}

impl LogMetadata {
    /// `<partition>:work-product-component:<uid>`, substituting `osdu` for a blank partition and
    /// `unknown` for a blank uid.
    pub fn resource_id(&self, data_partition: &str) -> String {
        let partition = non_blank_or(data_partition, DEFAULT_DATA_PARTITION);
        let uid = non_blank_or(&self.uid, UNKNOWN_UID);
        format!("{}:work-product-component:{}", partition, uid)
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resource_id_uses_partition_and_uid() {
        let metadata = LogMetadata {
            uid: "log-1".to_owned(),
            ..LogMetadata::default()
        };
        assert_eq!(
            metadata.resource_id("com.mycompany"),
            "com.mycompany:work-product-component:log-1"
        );
    }

    #[test]
    fn test_resource_id_falls_back_when_blank() {
        let metadata = LogMetadata {
            uid: "   ".to_owned(),
            ..LogMetadata::default()
        };
        assert_eq!(
            metadata.resource_id(""),
            "osdu:work-product-component:unknown"
        );
    }

    #[test]
    fn test_resource_id_trims_components() {
        let metadata = LogMetadata {
            uid: " log-7 ".to_owned(),
            ..LogMetadata::default()
        };
        assert_eq!(
            metadata.resource_id(" tenant "),
            "tenant:work-product-component:log-7"
        );
    }
}
