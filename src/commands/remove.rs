//! ecobrand remove コマンド
//!
//! 確認のうえブランドを削除する。

use super::Context;
use crate::brand::Brand;
use crate::error::CatalogError;
use crate::output::{print_card, success};
use clap::Parser;
use std::io::{self, Write};

#[derive(Debug, Parser)]
pub struct Args {
    /// Brand ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let user = ctx.current_user()?;
    let mut collection = ctx.load_collection(false).await;

    // 1. 事前チェック: 存在と所有者
    let brand = collection
        .get(&args.id)
        .ok_or_else(|| CatalogError::BrandNotFound(args.id.clone()).to_string())?;
    brand
        .ensure_editable(user.as_ref())
        .map_err(|e| e.to_string())?;

    // 2. 削除対象の表示と確認（--yes でスキップ）
    print_card(brand, collection.favorites().contains(&args.id));
    println!();
    if !args.yes && !confirm_remove(brand)? {
        println!("Delete cancelled.");
        return Ok(());
    }

    // 3. 削除実行
    let removed = collection
        .remove(&ctx.store, &args.id, user.as_ref())
        .await
        .map_err(|e| e.to_string())?;
    success(&format!("Brand '{}' deleted.", removed.name));
    Ok(())
}

/// 確認プロンプトを表示
fn confirm_remove(brand: &Brand) -> Result<bool, String> {
    print!("Are you sure you want to delete '{}'? [y/N]: ", brand.name);
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {}", e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {}", e))?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
