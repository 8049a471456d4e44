//! ブランド一覧から導出する統計
//!
//! - カテゴリ別件数
//! - 国別の平均スコア
//! - 直近6件のスコア推移
//! - スコア上位5件
//!
//! いずれも入力スライスの純粋関数で、変更のたびに全件から再計算する。

use crate::brand::Brand;
use serde::Serialize;

/// 推移グラフに含める件数
pub const TREND_LENGTH: usize = 6;

/// ランキングの件数
pub const TOP_BRAND_COUNT: usize = 5;

/// カテゴリ別件数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

impl CategoryCount {
    /// 全体に占める割合（整数%、四捨五入）
    pub fn percent(&self, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        (self.count as f64 * 100.0 / total as f64).round() as u32
    }
}

/// 国別の平均スコア
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryAverage {
    pub country: String,
    pub average_score: u32,
    /// 平均に寄与したブランド数
    pub brands: usize,
}

/// 推移グラフの1点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub score: u8,
}

/// 4種類の統計をまとめたもの
#[derive(Debug, Clone, Serialize)]
pub struct Insights<'a> {
    pub total: usize,
    pub categories: Vec<CategoryCount>,
    pub countries: Vec<CountryAverage>,
    pub trend: Vec<TrendPoint>,
    pub top_brands: Vec<&'a Brand>,
}

impl<'a> Insights<'a> {
    pub fn compute(brands: &'a [Brand]) -> Self {
        Self {
            total: brands.len(),
            categories: category_counts(brands),
            countries: average_score_by_country(brands),
            trend: recent_trend(brands),
            top_brands: top_brands(brands, TOP_BRAND_COUNT),
        }
    }
}

/// カテゴリごとの件数（初出順、カテゴリ表記は正規化しない）
pub fn category_counts(brands: &[Brand]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for brand in brands {
        match counts.iter_mut().find(|c| c.category == brand.category) {
            Some(existing) => existing.count += 1,
            None => counts.push(CategoryCount {
                category: brand.category.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// 国ごとの平均スコア（初出順、四捨五入）
///
/// グループはメンバーが現れたときにだけ作られるため、件数0での除算は起きない。
pub fn average_score_by_country(brands: &[Brand]) -> Vec<CountryAverage> {
    // (国, 合計, 件数)
    let mut groups: Vec<(&str, u64, usize)> = Vec::new();
    for brand in brands {
        let score = u64::from(brand.sustainability_score);
        match groups.iter_mut().find(|(c, _, _)| *c == brand.country) {
            Some((_, total, count)) => {
                *total += score;
                *count += 1;
            }
            None => groups.push((&brand.country, score, 1)),
        }
    }

    groups
        .into_iter()
        .map(|(country, total, count)| CountryAverage {
            country: country.to_string(),
            average_score: (total as f64 / count as f64).round() as u32,
            brands: count,
        })
        .collect()
}

/// 末尾6件を現在の並び順のまま "Brand 1".. のラベル付きで返す
///
/// 時刻による並び替えはしない。どちらが新しいかは呼び出し側の並び順に従う。
pub fn recent_trend(brands: &[Brand]) -> Vec<TrendPoint> {
    let start = brands.len().saturating_sub(TREND_LENGTH);
    brands[start..]
        .iter()
        .enumerate()
        .map(|(i, brand)| TrendPoint {
            label: format!("Brand {}", i + 1),
            score: brand.sustainability_score,
        })
        .collect()
}

/// スコア上位 `n` 件
///
/// 同点は入力順（安定ソート）で決まる。
pub fn top_brands(brands: &[Brand], n: usize) -> Vec<&Brand> {
    let mut ranked: Vec<&Brand> = brands.iter().collect();
    ranked.sort_by(|a, b| b.sustainability_score.cmp(&a.sustainability_score));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
#[path = "insights_test.rs"]
mod tests;

#[cfg(test)]
#[path = "insights_proptests.rs"]
mod proptests;
