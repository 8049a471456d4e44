use crate::brand::{Brand, ScoreTier};
use crate::collection::LoadReport;
use owo_colors::OwoColorize;

/// スコア帯で色分けしたスコア表示
pub fn score_badge(score: u8) -> String {
    match ScoreTier::from_score(score) {
        ScoreTier::High => score.green().to_string(),
        ScoreTier::Medium => score.yellow().to_string(),
        ScoreTier::Low => score.red().to_string(),
    }
}

/// レーティングは小数1桁
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// 成功メッセージ
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// 読み込み時の警告を stderr に出す
pub fn print_load_warnings(report: &LoadReport) {
    if let Some(error) = &report.error {
        eprintln!(
            "{} Could not load brands from the record store: {}",
            "!".yellow(),
            error
        );
    }
    if !report.quarantined.is_empty() {
        eprintln!(
            "{} Skipped {} malformed record(s):",
            "!".yellow(),
            report.quarantined.len()
        );
        for record in &report.quarantined {
            eprintln!(
                "  - {}: {}",
                record.id.as_deref().unwrap_or("<no id>"),
                record.reason
            );
        }
    }
}

/// ブランドカードの詳細表示
pub fn print_card(brand: &Brand, is_favorite: bool) {
    let heart = if is_favorite { " ♥" } else { "" };
    println!("{}{}", brand.name.bold(), heart.red());
    println!("  {:<18} {}", "ID", brand.id);
    println!("  {:<18} {}", "Country", brand.country);
    println!(
        "  {:<18} {}",
        "Sustainability",
        score_badge(brand.sustainability_score)
    );
    println!("  {:<18} {}", "Category", brand.category);
    println!("  {:<18} {}", "Price Range", brand.price_range);
    println!("  {:<18} {}", "Material", brand.material);
    println!("  {:<18} ★ {}", "Rating", format_rating(brand.rating));
    println!("  {:<18} {}", "Ethical Practices", brand.ethical_practices);
    println!("  {:<18} {}", "Owner", brand.owner());
    if let Some(description) = &brand.description {
        println!();
        println!("  {}", description);
    }
}
