use tracing::debug;

use crate::error::Error;
use crate::error::Error::MissingParameter;
use crate::model::{DataType, QueryParams};

/// Maps a requested data type and its identifiers to exactly one service endpoint.
pub struct EndpointResolver {
    base_url: String,
}

impl EndpointResolver {
    pub fn new(base_url: &str) -> EndpointResolver {
        EndpointResolver {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve(&self, data_type: DataType, params: &QueryParams) -> Result<String, Error> {
        let url = match data_type {
            DataType::MetadataStats => format!("{base}/api/metadata/stats", base = self.base_url),
            DataType::SampleinfoStats => {
                format!("{base}/api/sampleinfo/stats", base = self.base_url)
            }
            DataType::Metadata => self.metadata_url(params)?,
            DataType::Sampleinfo => self.sampleinfo_url(params)?,
        };

        debug!(%data_type, %url, "resolved endpoint");
        Ok(url)
    }

    // study_id wins over center_id when both are given
    fn metadata_url(&self, params: &QueryParams) -> Result<String, Error> {
        match (&params.study_id, &params.center_id) {
            (Some(study_id), _) => Ok(format!(
                "{base}/api/metadata/study/{study_id}",
                base = self.base_url
            )),
            (None, Some(center_id)) => Ok(format!(
                "{base}/api/metadata/center/{center_id}",
                base = self.base_url
            )),
            (None, None) => Err(MissingParameter(
                "Missing value - \"study_id\" or \"center_id\" value is required to run the metadata query."
                    .to_string(),
            )),
        }
    }

    fn sampleinfo_url(&self, params: &QueryParams) -> Result<String, Error> {
        match (&params.center_ids, &params.dataset_type_id) {
            (Some(center_ids), Some(dataset_type_id)) => Ok(format!(
                "{base}/api/sampleinfo/center_datasettype/{center_ids}/{dataset_type_id}",
                base = self.base_url
            )),
            (Some(center_ids), None) => Ok(format!(
                "{base}/api/sampleinfo/dataset?center_ids={center_ids}",
                base = self.base_url
            )),
            (None, _) => Err(MissingParameter(
                "Missing value - \"center_ids\" value is required to run the sampleinfo query."
                    .to_string(),
            )),
        }
    }
}
