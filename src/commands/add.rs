//! ecobrand add コマンド
//!
//! 新しいブランドを作成してレコードストアに保存する。

use super::Context;
use crate::brand::{BrandDraft, CATEGORIES, MAX_RATING, PRICE_RANGES};
use crate::output::{print_card, success};
use clap::builder::PossibleValuesParser;
use clap::Parser;

/// 作成・編集で共通のフィールド指定
///
/// 未指定のフィールドは元のドラフトの値を残す。
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BrandFields {
    /// Brand name
    #[arg(long)]
    pub name: Option<String>,

    /// Country of origin
    #[arg(long)]
    pub country: Option<String>,

    /// Category
    #[arg(long, value_parser = PossibleValuesParser::new(CATEGORIES))]
    pub category: Option<String>,

    /// Price range
    #[arg(long, value_name = "PRICE", value_parser = PossibleValuesParser::new(PRICE_RANGES.map(|(value, _)| value)))]
    pub price_range: Option<String>,

    /// Main material
    #[arg(long)]
    pub material: Option<String>,

    /// Sustainability score (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub score: Option<u8>,

    /// Rating (0-5)
    #[arg(long, value_parser = parse_rating)]
    pub rating: Option<f64>,

    /// Ethical practices summary
    #[arg(long, value_name = "TEXT")]
    pub ethical_practices: Option<String>,

    /// Description (empty string clears it)
    #[arg(long)]
    pub description: Option<String>,
}

impl BrandFields {
    /// 指定されたフィールドだけドラフトに上書きする
    pub fn apply(self, mut draft: BrandDraft) -> BrandDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(country) = self.country {
            draft.country = country;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(price_range) = self.price_range {
            draft.price_range = price_range;
        }
        if let Some(material) = self.material {
            draft.material = material;
        }
        if let Some(score) = self.score {
            draft.sustainability_score = score;
        }
        if let Some(rating) = self.rating {
            draft.rating = rating;
        }
        if let Some(ethical_practices) = self.ethical_practices {
            draft.ethical_practices = ethical_practices;
        }
        if let Some(description) = self.description {
            draft.description = Some(description);
        }
        draft
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.country.is_none()
            && self.category.is_none()
            && self.price_range.is_none()
            && self.material.is_none()
            && self.score.is_none()
            && self.rating.is_none()
            && self.ethical_practices.is_none()
            && self.description.is_none()
    }
}

fn parse_rating(s: &str) -> Result<f64, String> {
    let rating: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(format!("rating must be between 0 and {}", MAX_RATING));
    }
    Ok(rating)
}

#[derive(Debug, Parser)]
#[command(after_help = "Unset score defaults to 50 and unset rating to 0.")]
pub struct Args {
    #[command(flatten)]
    pub fields: BrandFields,
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let user = ctx.current_user()?;
    let draft = args.fields.apply(BrandDraft::default());
    draft.validate().map_err(|e| e.to_string())?;

    let mut collection = ctx.load_collection(false).await;
    let brand = collection
        .add(&ctx.store, draft, user.as_ref())
        .await
        .map_err(|e| e.to_string())?;

    success(&format!("Brand '{}' added.", brand.name));
    print_card(brand, false);
    Ok(())
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
