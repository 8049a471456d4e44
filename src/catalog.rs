//! カタログの絞り込みと並び替え
//!
//! ブランド一覧を検索テキスト・カテゴリ・素材で絞り込み、指定キーで並べる。
//! 入力は変更せず、毎回全件から再計算する純粋関数。

mod collate;

pub use collate::locale_cmp;

use crate::brand::Brand;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 並び替えキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// 名前の昇順
    #[default]
    Name,
    /// スコアの降順
    Score,
    /// レーティングの降順
    Rating,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Score => "score",
            SortKey::Rating => "rating",
        }
    }

    /// 次のキー（TUI での切り替え用）
    pub fn next(&self) -> Self {
        match self {
            SortKey::Name => SortKey::Score,
            SortKey::Score => SortKey::Rating,
            SortKey::Rating => SortKey::Name,
        }
    }
}

/// 絞り込み・並び替え条件
///
/// 空文字列の条件は「絞り込まない」を意味する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// 名前または国に対する部分一致（大文字小文字を区別しない）
    pub search: String,
    /// カテゴリの完全一致（大文字小文字を区別する）
    pub category: String,
    /// 素材に対する部分一致（大文字小文字を区別しない）
    pub material: String,
    pub sort: SortKey,
}

impl CatalogQuery {
    /// 条件にマッチするか（すべての有効な条件の AND）
    pub fn matches(&self, brand: &Brand) -> bool {
        matches_search(brand, &self.search)
            && matches_category(brand, &self.category)
            && matches_material(brand, &self.material)
    }
}

fn matches_search(brand: &Brand, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let query = search.to_lowercase();
    brand.name.to_lowercase().contains(&query) || brand.country.to_lowercase().contains(&query)
}

fn matches_category(brand: &Brand, category: &str) -> bool {
    category.is_empty() || brand.category == category
}

fn matches_material(brand: &Brand, material: &str) -> bool {
    material.is_empty() || brand.material.to_lowercase().contains(&material.to_lowercase())
}

/// 条件で絞り込み、指定キーで並べたブランド一覧を返す
///
/// 並び替えは安定ソート。同値のブランドは入力順を保つ。
pub fn filter_and_sort<'a>(brands: &'a [Brand], query: &CatalogQuery) -> Vec<&'a Brand> {
    let mut filtered: Vec<&Brand> = brands.iter().filter(|b| query.matches(b)).collect();
    sort_brands(&mut filtered, query.sort);
    filtered
}

/// 指定キーで安定ソート
pub fn sort_brands(brands: &mut [&Brand], key: SortKey) {
    match key {
        SortKey::Name => brands.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortKey::Score => {
            brands.sort_by(|a, b| b.sustainability_score.cmp(&a.sustainability_score))
        }
        // -0.0 と 0.0 は同値として入力順を保つ
        SortKey::Rating => brands.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
    }
}

/// 出現順で重複を除いたカテゴリ一覧
pub fn distinct_categories(brands: &[Brand]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for brand in brands {
        if !seen.contains(&brand.category.as_str()) {
            seen.push(&brand.category);
        }
    }
    seen
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

#[cfg(test)]
#[path = "catalog_proptests.rs"]
mod proptests;
