//! テスト用インメモリ RecordStore

use super::*;
use crate::error::CatalogError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// テスト用レコードストア
pub struct MockRecordStore {
    records: RwLock<Vec<serde_json::Value>>,
    fail: AtomicBool,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    /// ブランドで初期化
    pub fn with_brands(brands: &[Brand]) -> Self {
        let store = Self::new();
        for brand in brands {
            store.add_raw(serde_json::to_value(brand).unwrap());
        }
        store
    }

    /// 生レコードを追加（不正レコードの注入用）
    pub fn add_raw(&self, record: serde_json::Value) {
        self.records.write().unwrap().push(record);
    }

    /// 以降の呼び出しをすべて 503 で失敗させる
    pub fn fail_requests(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// 現在保存されている id 一覧
    pub fn ids(&self) -> Vec<String> {
        self.records
            .read()
            .unwrap()
            .iter()
            .filter_map(|r| r.get("id").and_then(|v| v.as_str()).map(str::to_string))
            .collect()
    }

    /// id でブランドを取得
    pub fn get(&self, id: &str) -> Option<Brand> {
        self.records
            .read()
            .unwrap()
            .iter()
            .find(|r| r.get("id").and_then(|v| v.as_str()) == Some(id))
            .and_then(|r| Brand::from_record(r.clone()).ok())
    }

    fn check(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CatalogError::StoreApi {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records
            .read()
            .unwrap()
            .iter()
            .position(|r| r.get("id").and_then(|v| v.as_str()) == Some(id))
    }
}

impl Default for MockRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MockRecordStore {
    fn list(&self) -> Pin<Box<dyn Future<Output = Result<LoadedBrands>> + Send + '_>> {
        Box::pin(async move {
            self.check()?;
            let records = self.records.read().unwrap().clone();
            Ok(decode_records(records))
        })
    }

    fn create<'a>(
        &'a self,
        brand: &'a Brand,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.check()?;
            self.add_raw(serde_json::to_value(brand)?);
            Ok(())
        })
    }

    fn replace<'a>(
        &'a self,
        brand: &'a Brand,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.check()?;
            let idx = self
                .position(&brand.id)
                .ok_or_else(|| CatalogError::BrandNotFound(brand.id.clone()))?;
            self.records.write().unwrap()[idx] = serde_json::to_value(brand)?;
            Ok(())
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.check()?;
            let idx = self
                .position(id)
                .ok_or_else(|| CatalogError::BrandNotFound(id.to_string()))?;
            self.records.write().unwrap().remove(idx);
            Ok(())
        })
    }
}
