//! ecobrand edit コマンド
//!
//! 既存ブランドのフィールドを書き換える。指定しなかったフィールドは現在の値のまま。

use super::add::BrandFields;
use super::Context;
use crate::brand::BrandDraft;
use crate::error::CatalogError;
use crate::output::{print_card, success};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Brand ID
    pub id: String,

    #[command(flatten)]
    pub fields: BrandFields,
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    if args.fields.is_empty() {
        return Err("Nothing to change: pass at least one field (see --help)".to_string());
    }
    let user = ctx.current_user()?;

    let mut collection = ctx.load_collection(false).await;
    let current = collection
        .get(&args.id)
        .ok_or_else(|| CatalogError::BrandNotFound(args.id.clone()).to_string())?;
    let draft = args.fields.apply(BrandDraft::from(current));

    let is_favorite = collection.favorites().contains(&args.id);
    let brand = collection
        .update(&ctx.store, &args.id, draft, user.as_ref())
        .await
        .map_err(|e| e.to_string())?;

    success(&format!("Brand '{}' updated.", brand.name));
    print_card(brand, is_favorite);
    Ok(())
}
