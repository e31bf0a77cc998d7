use crate::core::{export, fetch, normalize};
use crate::domain::model::TransformResult;
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use reqwest::Client;
use serde_json::Value;

pub const OUTPUT_FILE: &str = "countries.csv";

/// Extract/transform/load over the country dataset: fetch raw entries,
/// flatten them into canonical records, write the CSV projection.
pub struct CountryPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> CountryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CountryPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Value>> {
        fetch::fetch_countries(&self.client, self.config.api_endpoint()).await
    }

    async fn transform(&self, raw: Vec<Value>) -> Result<TransformResult> {
        let records = normalize::normalize(&raw);
        tracing::debug!("normalized {} of {} raw entries", records.len(), raw.len());

        let csv_output = export::to_csv(&records)?;
        Ok(TransformResult {
            records,
            csv_output,
        })
    }

    async fn load(&self, result: &TransformResult) -> Result<String> {
        tracing::debug!(
            "writing {} bytes of CSV to storage",
            result.csv_output.len()
        );
        self.storage
            .write_file(OUTPUT_FILE, result.csv_output.as_bytes())
            .await?;

        Ok(format!("{}/{}", self.config.output_path(), OUTPUT_FILE))
    }
}
