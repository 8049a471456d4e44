use super::*;
use crate::brand::fixture::BrandBuilder;
use clap::ValueEnum;
use proptest::prelude::*;
use std::cmp::Ordering;

fn brand_strategy() -> impl Strategy<Value = Brand> {
    (
        "[A-Za-zÉé ]{1,10}",
        prop::sample::select(vec!["US", "FR", "us", "Japan", "Peru"]),
        prop::sample::select(vec!["Clothing", "Footwear", "Bags"]),
        prop::sample::select(vec!["Organic Cotton", "Hemp", "recycled cotton"]),
        0u8..=100,
        0u32..=50,
    )
        .prop_map(|(name, country, category, material, score, rating)| {
            BrandBuilder::new("id", &name)
                .country(country)
                .category(category)
                .material(material)
                .score(score)
                .rating(f64::from(rating) / 10.0)
                .build()
        })
}

fn brands_strategy() -> impl Strategy<Value = Vec<Brand>> {
    prop::collection::vec(brand_strategy(), 0..30)
}

fn query_strategy() -> impl Strategy<Value = CatalogQuery> {
    (
        prop::sample::select(vec!["", "us", "a", "JAP"]),
        prop::sample::select(vec!["", "Clothing", "Bags"]),
        prop::sample::select(vec!["", "cotton", "HEMP"]),
        prop::sample::select(SortKey::value_variants().to_vec()),
    )
        .prop_map(|(search, category, material, sort)| CatalogQuery {
            search: search.to_string(),
            category: category.to_string(),
            material: material.to_string(),
            sort,
        })
}

proptest! {
    /// 条件が空なら全件が返る（並び順だけが変わる）
    #[test]
    fn prop_empty_criteria_returns_all(
        brands in brands_strategy(),
        sort in prop::sample::select(SortKey::value_variants().to_vec())
    ) {
        let query = CatalogQuery { sort, ..CatalogQuery::default() };
        let result = filter_and_sort(&brands, &query);
        prop_assert_eq!(result.len(), brands.len());
    }

    /// 名前順は locale_cmp で非減少
    #[test]
    fn prop_name_sort_is_non_decreasing(brands in brands_strategy()) {
        let result = filter_and_sort(&brands, &CatalogQuery::default());
        for pair in result.windows(2) {
            prop_assert_ne!(locale_cmp(&pair[0].name, &pair[1].name), Ordering::Greater);
        }
    }

    /// スコア順・レーティング順は非増加
    #[test]
    fn prop_numeric_sorts_are_non_increasing(brands in brands_strategy()) {
        let by_score = filter_and_sort(
            &brands,
            &CatalogQuery { sort: SortKey::Score, ..CatalogQuery::default() },
        );
        for pair in by_score.windows(2) {
            prop_assert!(pair[0].sustainability_score >= pair[1].sustainability_score);
        }

        let by_rating = filter_and_sort(
            &brands,
            &CatalogQuery { sort: SortKey::Rating, ..CatalogQuery::default() },
        );
        for pair in by_rating.windows(2) {
            prop_assert!(pair[0].rating >= pair[1].rating);
        }
    }

    /// 同じ条件を再適用しても結果は変わらない
    #[test]
    fn prop_filter_is_idempotent(brands in brands_strategy(), query in query_strategy()) {
        let once: Vec<Brand> = filter_and_sort(&brands, &query).into_iter().cloned().collect();
        let twice: Vec<Brand> = filter_and_sort(&once, &query).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    /// 結果のすべての要素が条件を満たす
    #[test]
    fn prop_every_result_matches(brands in brands_strategy(), query in query_strategy()) {
        let result = filter_and_sort(&brands, &query);
        prop_assert!(result.iter().all(|b| query.matches(b)));
        let expected = brands.iter().filter(|b| query.matches(b)).count();
        prop_assert_eq!(result.len(), expected);
    }
}
