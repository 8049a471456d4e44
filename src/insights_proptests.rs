use super::*;
use crate::brand::fixture::BrandBuilder;
use proptest::prelude::*;

fn brands_strategy() -> impl Strategy<Value = Vec<Brand>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["US", "FR", "JP", "us"]),
            prop::sample::select(vec!["Clothing", "Bags", "Jewelry", "bags"]),
            0u8..=100,
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (country, category, score))| {
                BrandBuilder::new(&i.to_string(), &format!("Brand{}", i))
                    .country(country)
                    .category(category)
                    .score(score)
                    .build()
            })
            .collect()
    })
}

proptest! {
    /// カテゴリ件数の合計は入力件数と一致し、0件のグループはない
    #[test]
    fn prop_category_counts_sum_to_total(brands in brands_strategy()) {
        let counts = category_counts(&brands);
        let total: usize = counts.iter().map(|c| c.count).sum();
        prop_assert_eq!(total, brands.len());
        prop_assert!(counts.iter().all(|c| c.count > 0));
    }

    /// 国別平均はその国のスコアの最小値と最大値の間に収まる
    #[test]
    fn prop_country_average_is_bounded(brands in brands_strategy()) {
        for avg in average_score_by_country(&brands) {
            let scores: Vec<u32> = brands
                .iter()
                .filter(|b| b.country == avg.country)
                .map(|b| u32::from(b.sustainability_score))
                .collect();
            let min = *scores.iter().min().unwrap();
            let max = *scores.iter().max().unwrap();
            prop_assert!(avg.average_score >= min && avg.average_score <= max);
            prop_assert_eq!(avg.brands, scores.len());
        }
    }

    /// 上位ランキングは5件以下で、選ばれなかったどのブランドよりもスコアが低くない
    #[test]
    fn prop_top_brands_dominate_the_rest(brands in brands_strategy()) {
        let top = top_brands(&brands, TOP_BRAND_COUNT);
        prop_assert!(top.len() <= TOP_BRAND_COUNT);
        prop_assert_eq!(top.len(), brands.len().min(TOP_BRAND_COUNT));

        let lowest_selected = top.iter().map(|b| b.sustainability_score).min();
        if let Some(lowest) = lowest_selected {
            for brand in &brands {
                if !top.iter().any(|t| t.id == brand.id) {
                    prop_assert!(brand.sustainability_score <= lowest);
                }
            }
        }
    }

    /// 推移は末尾の最大6件をそのままの順で返す
    #[test]
    fn prop_trend_is_suffix(brands in brands_strategy()) {
        let trend = recent_trend(&brands);
        prop_assert_eq!(trend.len(), brands.len().min(TREND_LENGTH));
        let offset = brands.len() - trend.len();
        for (i, point) in trend.iter().enumerate() {
            prop_assert_eq!(point.score, brands[offset + i].sustainability_score);
            prop_assert_eq!(&point.label, &format!("Brand {}", i + 1));
        }
    }
}
