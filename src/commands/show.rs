//! ecobrand show コマンド
//!
//! ブランド1件の詳細をカード形式で表示する。

use super::Context;
use crate::error::CatalogError;
use crate::output::print_card;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Brand ID
    pub id: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let collection = ctx.load_collection(args.json).await;
    let brand = collection
        .get(&args.id)
        .ok_or_else(|| CatalogError::BrandNotFound(args.id.clone()).to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(brand)
            .map_err(|e| format!("Failed to serialize brand: {}", e))?;
        println!("{json}");
    } else {
        print_card(brand, collection.favorites().contains(&brand.id));
    }
    Ok(())
}
