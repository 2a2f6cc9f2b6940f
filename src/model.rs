use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;
use crate::error::Error::{InvalidDataType, InvalidOutputFormat};

/// Kind of dataset requested from the sampleinfo service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    /// List of the available metadata datasets.
    #[default]
    MetadataStats,
    /// List of the available sampleinfo datasets.
    SampleinfoStats,
    /// Metadata dataset of a study, or of the default study of a center.
    Metadata,
    /// Sampleinfo dataset of one or more centers.
    Sampleinfo,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::MetadataStats => "metadata_stats",
            DataType::SampleinfoStats => "sampleinfo_stats",
            DataType::Metadata => "metadata",
            DataType::Sampleinfo => "sampleinfo",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim() {
            "" | "metadata_stats" => Ok(DataType::MetadataStats),
            "sampleinfo_stats" => Ok(DataType::SampleinfoStats),
            "metadata" => Ok(DataType::Metadata),
            "sampleinfo" => Ok(DataType::Sampleinfo),
            invalid => Err(InvalidDataType(format!(
                "Unexpected data_type value ({invalid}) was provided. Run --help for the list of expected values."
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim() {
            "" | "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            invalid => Err(InvalidOutputFormat(format!(
                "Unexpected output format ({invalid}) was provided. Expected values are: csv, json."
            ))),
        }
    }
}

/// Identifiers narrowing a metadata or sampleinfo query.
///
/// Values are trimmed on construction, whitespace-only input is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub(crate) study_id: Option<String>,
    pub(crate) center_id: Option<String>,
    pub(crate) center_ids: Option<String>,
    pub(crate) dataset_type_id: Option<String>,
}

impl QueryParams {
    pub fn new(
        study_id: &str,
        center_id: &str,
        center_ids: &str,
        dataset_type_id: &str,
    ) -> QueryParams {
        QueryParams {
            study_id: non_blank(study_id),
            center_id: non_blank(center_id),
            center_ids: non_blank(center_ids),
            dataset_type_id: non_blank(dataset_type_id),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
