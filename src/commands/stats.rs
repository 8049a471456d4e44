//! ecobrand stats コマンド
//!
//! カテゴリ別件数・国別平均スコア・直近の推移・上位ブランドを表示する。

use super::Context;
use crate::insights::{CategoryCount, CountryAverage, Insights, TrendPoint};
use crate::output::{format_rating, score_badge};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let collection = ctx.load_collection(args.json).await;
    let insights = Insights::compute(collection.brands());

    if args.json {
        let json = serde_json::to_string_pretty(&insights)
            .map_err(|e| format!("Failed to serialize statistics: {}", e))?;
        println!("{json}");
        return Ok(());
    }

    if insights.total == 0 {
        println!("No brands yet");
        return Ok(());
    }

    println!("{} brand(s) from {}", insights.total, ctx.config.api_url);
    println!();
    print_section("Brands by Category", category_table(&insights.categories, insights.total));
    print_section("Average Score by Country", country_table(&insights.countries));
    print_section("Recent Sustainability Scores", trend_table(&insights.trend));
    print_section("Top Sustainable Brands", top_table(&insights));
    Ok(())
}

fn print_section(title: &str, table: Table) {
    println!("{}", title.bold());
    println!("{table}");
    println!();
}

fn category_table(categories: &[CategoryCount], total: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Category", "Brands", "Share"]);
    for entry in categories {
        table.add_row(vec![
            entry.category.clone(),
            entry.count.to_string(),
            format!("{}%", entry.percent(total)),
        ]);
    }
    table
}

fn country_table(countries: &[CountryAverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Country", "Average Score", "Brands"]);
    for entry in countries {
        table.add_row(vec![
            entry.country.clone(),
            entry.average_score.to_string(),
            entry.brands.to_string(),
        ]);
    }
    table
}

fn trend_table(trend: &[TrendPoint]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Point", "Score"]);
    for point in trend {
        table.add_row(vec![point.label.clone(), score_badge(point.score)]);
    }
    table
}

fn top_table(insights: &Insights<'_>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Name", "Country", "Score", "Rating"]);
    for (rank, brand) in insights.top_brands.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            brand.name.clone(),
            brand.country.clone(),
            score_badge(brand.sustainability_score),
            format_rating(brand.rating),
        ]);
    }
    table
}
