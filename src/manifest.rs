use serde::{Deserialize, Serialize};

use crate::model::log_metadata::LogMetadata;
use crate::utils::format_timestamp;

pub const MANIFEST_KIND: &str = "osdu:wks:work-product-component:1.0.0";
pub const LOG_RESOURCE_TYPE: &str = "osdu:wks:dataset--Log:1.0.0";

/// A WorkProductComponent manifest describing one or more WITSML logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub kind: String,
    pub legal: Legal,
    pub acl: Acl,
    pub data: Vec<Component>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legal {
    #[serde(rename = "legaltags")]
    pub legal_tags: Vec<String>,
    pub other_relevant_data_countries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acl {
    pub owners: Vec<String>,
    pub viewers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(rename = "resourceID")]
    pub resource_id: String,
    pub resource_type: String,
    pub name: Option<String>,
    pub source: String,
    pub schema: Option<String>,
    pub dataset_properties: DatasetProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetProperties {
    pub well_uid: String,
    pub wellbore_uid: String,
    pub well_name: Option<String>,
    pub wellbore_name: Option<String>,
    pub service_company: Option<String>,
    pub run_number: Option<String>,
    pub index_type: Option<String>,
    pub start_index: Option<String>,
    pub end_index: Option<String>,
    pub creation_time: Option<String>,
    pub last_change_time: Option<String>,
}

impl Component {
    pub fn from_log(source: String, metadata: LogMetadata, data_partition: &str) -> Self {
        let resource_id = metadata.resource_id(data_partition);
        let LogMetadata {
            uid: _,
            well_uid,
            wellbore_uid,
            name,
            well_name,
            wellbore_name,
            service_company,
            run_number,
            index_type,
            start_index,
            end_index,
            schema_version,
            creation_time,
            last_change_time,
        } = metadata;

        Component {
            resource_id,
            resource_type: LOG_RESOURCE_TYPE.to_owned(),
            name,
            source,
            schema: schema_version,
            dataset_properties: DatasetProperties {
                well_uid,
                wellbore_uid,
                well_name,
                wellbore_name,
                service_company,
                run_number,
                index_type,
                start_index,
                end_index,
                creation_time: creation_time.map(format_timestamp),
                last_change_time: last_change_time.map(format_timestamp),
            },
        }
    }
}

impl ManifestDocument {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
