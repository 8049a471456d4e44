//! ecobrand list コマンド
//!
//! ブランド一覧を検索・絞り込み・並び替えて表示する。

use super::Context;
use crate::brand::Brand;
use crate::catalog::{filter_and_sort, CatalogQuery, SortKey};
use crate::output::{format_rating, score_badge};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
#[command(after_help = "OUTPUT FORMATS:\n  (default)  table\n  --json     JSON array of brands\n  --simple   one \"<id> <name>\" per line")]
pub struct Args {
    /// Search by name or country (case-insensitive)
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Only brands in this category (exact match)
    #[arg(long, short = 'c', default_value = "")]
    pub category: String,

    /// Only brands whose material contains this text (case-insensitive)
    #[arg(long, short = 'm', default_value = "")]
    pub material: String,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortKey::Name)]
    pub sort: SortKey,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only ids and names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

impl Args {
    fn query(&self) -> CatalogQuery {
        CatalogQuery {
            search: self.search.clone(),
            category: self.category.clone(),
            material: self.material.clone(),
            sort: self.sort,
        }
    }
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    // 1. 一覧を取得
    let collection = ctx.load_collection(args.json).await;
    let total_count = collection.brands().len();

    // 2. 絞り込みと並び替え
    let brands = filter_and_sort(collection.brands(), &args.query());

    // 3. 出力
    if args.json {
        print_json(&brands)
    } else if args.simple {
        print_simple(&brands, total_count);
        Ok(())
    } else {
        print_table(&brands, total_count);
        Ok(())
    }
}

fn print_empty(total_count: usize) {
    if total_count == 0 {
        println!("No brands yet");
    } else {
        println!("No brands found");
    }
}

fn print_table(brands: &[&Brand], total_count: usize) {
    if brands.is_empty() {
        print_empty(total_count);
        return;
    }
    println!("{}", build_table(brands));
    println!("{} of {} brand(s)", brands.len(), total_count);
}

fn build_table(brands: &[&Brand]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "ID", "Name", "Country", "Category", "Price", "Material", "Score", "Rating",
    ]);

    for brand in brands {
        table.add_row(vec![
            brand.id.clone(),
            brand.name.clone(),
            brand.country.clone(),
            brand.category.clone(),
            brand.price_range.clone(),
            brand.material.clone(),
            score_badge(brand.sustainability_score),
            format_rating(brand.rating),
        ]);
    }
    table
}

fn print_json(brands: &[&Brand]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(brands)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize brands: {}", e))
}

fn print_simple(brands: &[&Brand], total_count: usize) {
    if brands.is_empty() {
        print_empty(total_count);
        return;
    }
    for brand in brands {
        println!("{} {}", brand.id, brand.name);
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
