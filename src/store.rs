//! レコードストア（json-server 互換の REST エンドポイント）
//!
//! 一覧・作成・全置換・削除の4操作のみを持つ。認証・ページング・部分更新はない。

mod http;

pub use http::HttpRecordStore;

use crate::brand::Brand;
use crate::error::Result;
use std::future::Future;
use std::pin::Pin;

/// 一覧取得の結果
///
/// 検証に失敗したレコードは `quarantined` に入り、`brands` には含まれない。
#[derive(Debug, Default)]
pub struct LoadedBrands {
    pub brands: Vec<Brand>,
    pub quarantined: Vec<QuarantinedRecord>,
}

/// 読み込めなかったレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarantinedRecord {
    /// レコードに id があればその値
    pub id: Option<String>,
    pub reason: String,
}

/// 生レコードを1件ずつ検証してデコードする
pub fn decode_records(records: Vec<serde_json::Value>) -> LoadedBrands {
    let mut loaded = LoadedBrands::default();
    for record in records {
        let id = record.get("id").and_then(|v| match v {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        match Brand::from_record(record) {
            Ok(brand) => loaded.brands.push(brand),
            Err(e) => {
                tracing::warn!(id = ?id, error = %e, "skipping malformed brand record");
                loaded.quarantined.push(QuarantinedRecord {
                    id,
                    reason: e.to_string(),
                });
            }
        }
    }
    loaded
}

/// レコードストア trait
pub trait RecordStore: Send + Sync {
    /// 全件取得
    fn list(&self) -> Pin<Box<dyn Future<Output = Result<LoadedBrands>> + Send + '_>>;

    /// 新規作成
    fn create<'a>(
        &'a self,
        brand: &'a Brand,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

    /// ID指定で丸ごと置換
    fn replace<'a>(
        &'a self,
        brand: &'a Brand,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

    /// ID指定で削除
    fn delete<'a>(&'a self, id: &'a str) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
