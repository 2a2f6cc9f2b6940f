use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::info;

use crate::error::Error;
use crate::progress::SpinnerHelper;

#[async_trait]
pub trait SampleInfoLoader {
    async fn fetch(&self, url: &str) -> Result<Value, Error>;
}

pub struct SampleInfoService {
    pub client: Client,
}

#[async_trait]
impl SampleInfoLoader for SampleInfoService {
    async fn fetch(&self, url: &str) -> Result<Value, Error> {
        let spinner = SpinnerHelper::create(format!("Requesting data from: {url}"))?;
        info!(%url, "requesting data");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                spinner.abandon_with_message(format!("FAILURE – Could not reach {url}."));
                return Err(e.into());
            }
        };
        let status = response.status();
        info!(%status, "received response");

        match status {
            StatusCode::OK => {
                let response_body = match response.text().await {
                    Ok(body) => body,
                    Err(e) => {
                        spinner.abandon_with_message(format!(
                            "FAILURE – Could not read the response of {url}."
                        ));
                        return Err(e.into());
                    }
                };
                spinner.finish_and_clear();
                Ok(serde_json::from_str::<Value>(&response_body)?)
            }
            _ => {
                spinner.abandon_with_message(format!("FAILURE – {url} answered with {status}."));
                Err(Error::UnexpectedStatus(format!(
                    "Something went wrong requesting {url}. Status code: {status}. Body: {body}",
                    body = response.text().await?
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockito::{mock, server_url};
    use reqwest::Client;
    use serde_json::json;

    use crate::error::Error;
    use crate::model::{DataType, QueryParams};
    use crate::resolver::EndpointResolver;
    use crate::service::{SampleInfoLoader, SampleInfoService};

    fn sampleinfo_service() -> SampleInfoService {
        SampleInfoService { client: Client::new() }
    }

    fn url_for(data_type: DataType, params: &QueryParams) -> String {
        EndpointResolver::new(&server_url())
            .resolve(data_type, params)
            .unwrap()
    }

    #[tokio::test]
    async fn given_stats_data_type_when_fetch_then_parsed_payload() {
        // Given
        let payload = json!({"data": [{"dataset": "metadata", "count": 3}]});
        let _m = mock("GET", "/api/metadata/stats")
            .with_status(200)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(payload.to_string())
            .create();

        // When
        let response = sampleinfo_service()
            .fetch(&url_for(DataType::MetadataStats, &QueryParams::default()))
            .await
            .unwrap();

        // Then
        assert_eq!(response, payload);
    }

    #[tokio::test]
    async fn given_study_id_when_fetch_metadata_then_study_endpoint_is_called() {
        // Given
        let m = mock("GET", "/api/metadata/study/S17")
            .with_status(200)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(r#"{"data": [{"sample_id": "A1"}]}"#)
            .expect(1)
            .create();
        let params = QueryParams::new("S17", "C9", "", "");

        // When
        let response = sampleinfo_service()
            .fetch(&url_for(DataType::Metadata, &params))
            .await
            .unwrap();

        // Then
        m.assert();
        assert_eq!(response["data"][0]["sample_id"], "A1");
    }

    #[tokio::test]
    async fn given_missing_resource_when_fetch_then_unexpected_status_error() {
        // Given
        let _m = mock("GET", "/api/metadata/center/unknown")
            .with_status(404)
            .with_body("center not found")
            .create();
        let params = QueryParams::new("", "unknown", "", "");

        // When
        let error = sampleinfo_service()
            .fetch(&url_for(DataType::Metadata, &params))
            .await
            .unwrap_err();

        // Then
        assert!(matches!(error, Error::UnexpectedStatus(_)));
        assert_eq!(error.exit_code(), 3);
        assert!(error.to_string().contains("404"));
        assert!(error.to_string().ends_with("Body: center not found"));
    }

    #[tokio::test]
    async fn given_non_json_body_when_fetch_then_json_error() {
        // Given
        let _m = mock("GET", "/api/sampleinfo/center_datasettype/C1,C2/2")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create();
        let params = QueryParams::new("", "", "C1,C2", "2");

        // When
        let error = sampleinfo_service()
            .fetch(&url_for(DataType::Sampleinfo, &params))
            .await
            .unwrap_err();

        // Then
        assert!(matches!(error, Error::JsonError(_)));
        assert_eq!(error.exit_code(), 4);
    }
}
