//! reqwest による RecordStore 実装

use super::{decode_records, LoadedBrands, RecordStore};
use crate::brand::Brand;
use crate::config::AppConfig;
use crate::error::{CatalogError, Result};
use crate::http::{with_retry, DEFAULT_MAX_RETRIES};
use reqwest::{Client, Response};
use std::future::Future;
use std::pin::Pin;

/// HTTP経由のレコードストア
pub struct HttpRecordStore {
    client: Client,
    base_url: String,
}

impl HttpRecordStore {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.http.build_client(), config.api_url.clone())
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn fetch_all(&self) -> Result<LoadedBrands> {
        tracing::debug!(url = %self.base_url, "listing brands");
        let response = self.client.get(&self.base_url).send().await?;
        let response = check_status(response).await?;
        let records: Vec<serde_json::Value> = response.json().await?;
        Ok(decode_records(records))
    }

    async fn post(&self, brand: &Brand) -> Result<()> {
        tracing::debug!(id = %brand.id, "creating brand");
        let response = self.client.post(&self.base_url).json(brand).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn put(&self, brand: &Brand) -> Result<()> {
        tracing::debug!(id = %brand.id, "replacing brand");
        let response = self
            .client
            .put(self.item_url(&brand.id))
            .json(brand)
            .send()
            .await?;
        check_status(response).await.map_err(|e| not_found_as(e, &brand.id))?;
        Ok(())
    }

    /// 削除。再試行での 404 は前回の試行で削除済みとみなす
    async fn remove(&self, id: &str, retried: bool) -> Result<()> {
        tracing::debug!(id = %id, retried, "deleting brand");
        let response = self.client.delete(self.item_url(id)).send().await?;
        match check_status(response).await {
            Ok(_) => Ok(()),
            Err(CatalogError::StoreApi { status: 404, .. }) if retried => {
                tracing::debug!(id = %id, "already deleted by an earlier attempt");
                Ok(())
            }
            Err(e) => Err(not_found_as(e, id)),
        }
    }
}

/// 2xx 以外を StoreApi エラーに変換
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    Err(CatalogError::StoreApi { status, message })
}

fn not_found_as(error: CatalogError, id: &str) -> CatalogError {
    match error {
        CatalogError::StoreApi { status: 404, .. } => CatalogError::BrandNotFound(id.to_string()),
        other => other,
    }
}

impl RecordStore for HttpRecordStore {
    fn list(&self) -> Pin<Box<dyn Future<Output = Result<LoadedBrands>> + Send + '_>> {
        Box::pin(with_retry(move || self.fetch_all(), DEFAULT_MAX_RETRIES))
    }

    // 作成は冪等でないためリトライしない
    fn create<'a>(
        &'a self,
        brand: &'a Brand,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(self.post(brand))
    }

    fn replace<'a>(
        &'a self,
        brand: &'a Brand,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(with_retry(move || self.put(brand), DEFAULT_MAX_RETRIES))
    }

    fn delete<'a>(&'a self, id: &'a str) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let mut attempts = 0u32;
        Box::pin(with_retry(
            move || {
                attempts += 1;
                self.remove(id, attempts > 1)
            },
            DEFAULT_MAX_RETRIES,
        ))
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
