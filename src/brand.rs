//! ブランドのドメインモデル
//!
//! レコードストアとやり取りする `Brand` と、フォーム入力にあたる `BrandDraft`。
//! 値の範囲チェックは構築時（ドラフト検証）と読み込み時に行う。

use crate::error::{CatalogError, Result};
use crate::session::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// 既知のカテゴリ
pub const CATEGORIES: [&str; 6] = [
    "Clothing",
    "Footwear",
    "Accessories",
    "Jewelry",
    "Bags",
    "Activewear",
];

/// 既知の価格帯（値, 表示ラベル）
pub const PRICE_RANGES: [(&str, &str); 4] = [
    ("$", "Budget"),
    ("$$", "Moderate"),
    ("$$$", "Premium"),
    ("$$$$", "Luxury"),
];

/// 所有者なしで作成されたブランドの user_id
pub const GUEST_OWNER: &str = "guest";

/// サステナビリティスコアの上限
pub const MAX_SCORE: u8 = 100;

/// レーティングの上限
pub const MAX_RATING: f64 = 5.0;

/// フォームのデフォルトスコア
pub const DEFAULT_SCORE: u8 = 50;

/// カタログの1レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub name: String,
    pub country: String,
    pub category: String,
    pub price_range: String,
    pub material: String,
    pub sustainability_score: u8,
    pub rating: f64,
    pub ethical_practices: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// モデル化していないフィールド（created_at など）。置換時もそのまま書き戻す
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// json-server は数値IDを返すことがあるため文字列に揃える
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}

/// スコア帯（カード表示の色分け）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreTier::High,
            60..=79 => ScoreTier::Medium,
            _ => ScoreTier::Low,
        }
    }
}

impl Brand {
    /// レコードストアの生レコードを検証付きでデコード
    pub fn from_record(record: serde_json::Value) -> Result<Self> {
        let brand: Brand = serde_json::from_value(record)?;
        check_score(brand.sustainability_score)?;
        check_rating(brand.rating)?;
        Ok(brand)
    }

    /// 所有者（未設定なら guest）
    pub fn owner(&self) -> &str {
        self.user_id.as_deref().unwrap_or(GUEST_OWNER)
    }

    /// 指定ユーザーが編集・削除できるか
    ///
    /// 所有者なし（guest）のレコードは誰でも編集できる。
    pub fn can_edit(&self, user: Option<&User>) -> bool {
        let owner = self.owner();
        owner == GUEST_OWNER || user.is_some_and(|u| u.id == owner)
    }

    /// 編集権限を確認
    pub fn ensure_editable(&self, user: Option<&User>) -> Result<()> {
        if self.can_edit(user) {
            Ok(())
        } else {
            Err(CatalogError::NotOwner {
                id: self.id.clone(),
            })
        }
    }

    /// ドラフトの内容で丸ごと置き換えたレコードを返す（id・所有者・未知フィールドは維持）
    pub fn replaced_with(&self, draft: BrandDraft) -> Result<Brand> {
        draft.validate()?;
        Ok(draft.into_brand(
            self.id.clone(),
            self.user_id.clone(),
            self.extra.clone(),
        ))
    }
}

/// 作成・編集フォームの入力値
#[derive(Debug, Clone, PartialEq)]
pub struct BrandDraft {
    pub name: String,
    pub country: String,
    pub category: String,
    pub price_range: String,
    pub material: String,
    pub sustainability_score: u8,
    pub rating: f64,
    pub ethical_practices: String,
    pub description: Option<String>,
}

impl Default for BrandDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: String::new(),
            category: String::new(),
            price_range: String::new(),
            material: String::new(),
            sustainability_score: DEFAULT_SCORE,
            rating: 0.0,
            ethical_practices: String::new(),
            description: None,
        }
    }
}

impl From<&Brand> for BrandDraft {
    fn from(brand: &Brand) -> Self {
        Self {
            name: brand.name.clone(),
            country: brand.country.clone(),
            category: brand.category.clone(),
            price_range: brand.price_range.clone(),
            material: brand.material.clone(),
            sustainability_score: brand.sustainability_score,
            rating: brand.rating,
            ethical_practices: brand.ethical_practices.clone(),
            description: brand.description.clone(),
        }
    }
}

impl BrandDraft {
    /// 入力値を検証
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("country", &self.country),
            ("material", &self.material),
            ("ethical practices", &self.ethical_practices),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CatalogError::Validation(format!("{} is required", field)));
            }
        }

        if !CATEGORIES.contains(&self.category.as_str()) {
            return Err(CatalogError::Validation(format!(
                "unknown category '{}' (expected one of: {})",
                self.category,
                CATEGORIES.join(", ")
            )));
        }

        if !PRICE_RANGES.iter().any(|(v, _)| *v == self.price_range) {
            return Err(CatalogError::Validation(format!(
                "unknown price range '{}' (expected $, $$, $$$ or $$$$)",
                self.price_range
            )));
        }

        check_score(self.sustainability_score)?;
        check_rating(self.rating)
    }

    /// 新規ブランドを作成
    ///
    /// ID は作成時刻（ミリ秒）、所有者はサインイン中のユーザー（なければ guest）。
    pub fn into_new_brand(self, user: Option<&User>, now: DateTime<Utc>) -> Result<Brand> {
        self.validate()?;
        let owner = user
            .map(|u| u.id.clone())
            .unwrap_or_else(|| GUEST_OWNER.to_string());
        Ok(self.into_brand(
            now.timestamp_millis().to_string(),
            Some(owner),
            serde_json::Map::new(),
        ))
    }

    fn into_brand(
        self,
        id: String,
        user_id: Option<String>,
        extra: serde_json::Map<String, serde_json::Value>,
    ) -> Brand {
        Brand {
            id,
            user_id,
            name: self.name.trim().to_string(),
            country: self.country.trim().to_string(),
            category: self.category,
            price_range: self.price_range,
            material: self.material.trim().to_string(),
            sustainability_score: self.sustainability_score,
            rating: self.rating,
            ethical_practices: self.ethical_practices.trim().to_string(),
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            extra,
        }
    }
}

fn check_score(score: u8) -> Result<()> {
    if score > MAX_SCORE {
        return Err(CatalogError::Validation(format!(
            "sustainability score {} is out of range (0-{})",
            score, MAX_SCORE
        )));
    }
    Ok(())
}

fn check_rating(rating: f64) -> Result<()> {
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err(CatalogError::Validation(format!(
            "rating {} is out of range (0-{})",
            rating, MAX_RATING
        )));
    }
    Ok(())
}

#[cfg(test)]
pub mod fixture;

#[cfg(test)]
#[path = "brand_test.rs"]
mod tests;
