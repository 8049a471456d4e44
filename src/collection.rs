//! セッション中のブランド一覧
//!
//! レコードストアへの書き込みが成功した後にだけメモリ上の一覧を更新する。
//! 一覧の並びは「新しいものが先頭」。

use crate::brand::{Brand, BrandDraft};
use crate::error::{CatalogError, Result};
use crate::favorites::FavoriteSet;
use crate::session::User;
use crate::store::{QuarantinedRecord, RecordStore};
use chrono::Utc;

/// メモリ上のブランド一覧とお気に入り
#[derive(Debug, Default)]
pub struct BrandCollection {
    brands: Vec<Brand>,
    favorites: FavoriteSet,
}

/// 読み込み結果
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub quarantined: Vec<QuarantinedRecord>,
    /// ストアに到達できなかった場合のエラーメッセージ
    pub error: Option<String>,
}

impl BrandCollection {
    pub fn new(brands: Vec<Brand>) -> Self {
        Self {
            brands,
            favorites: FavoriteSet::new(),
        }
    }

    /// ストアから全件読み込む
    ///
    /// 失敗してもエラーにはせず、空の一覧にしてレポートに理由を残す。
    pub async fn load(store: &dyn RecordStore) -> (Self, LoadReport) {
        match store.list().await {
            Ok(loaded) => {
                let report = LoadReport {
                    loaded: loaded.brands.len(),
                    quarantined: loaded.quarantined,
                    error: None,
                };
                (Self::new(loaded.brands), report)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load brands");
                let report = LoadReport {
                    error: Some(e.to_string()),
                    ..LoadReport::default()
                };
                (Self::default(), report)
            }
        }
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn get(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    fn require(&self, id: &str) -> Result<&Brand> {
        self.get(id)
            .ok_or_else(|| CatalogError::BrandNotFound(id.to_string()))
    }

    /// 新規作成して先頭に追加
    pub async fn add(
        &mut self,
        store: &dyn RecordStore,
        draft: BrandDraft,
        user: Option<&User>,
    ) -> Result<&Brand> {
        let brand = draft.into_new_brand(user, Utc::now())?;
        store.create(&brand).await?;
        self.brands.insert(0, brand);
        Ok(&self.brands[0])
    }

    /// 既存ブランドをドラフトの内容で丸ごと置き換える
    pub async fn update(
        &mut self,
        store: &dyn RecordStore,
        id: &str,
        draft: BrandDraft,
        user: Option<&User>,
    ) -> Result<&Brand> {
        let current = self.require(id)?;
        current.ensure_editable(user)?;
        let updated = current.replaced_with(draft)?;
        store.replace(&updated).await?;

        let idx = self
            .brands
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| CatalogError::BrandNotFound(id.to_string()))?;
        self.brands[idx] = updated;
        Ok(&self.brands[idx])
    }

    /// 削除（お気に入りからも外す）
    pub async fn remove(
        &mut self,
        store: &dyn RecordStore,
        id: &str,
        user: Option<&User>,
    ) -> Result<Brand> {
        self.require(id)?.ensure_editable(user)?;
        store.delete(id).await?;

        self.favorites.remove(id);
        let idx = self
            .brands
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| CatalogError::BrandNotFound(id.to_string()))?;
        Ok(self.brands.remove(idx))
    }

    /// お気に入りを切り替える（存在しないIDはエラー）
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        self.require(id)?;
        Ok(self.favorites.toggle(id))
    }

    /// お気に入りのブランド
    pub fn favorite_brands(&self) -> Vec<&Brand> {
        self.favorites.select(&self.brands)
    }
}

#[cfg(test)]
#[path = "collection_test.rs"]
mod tests;
