//! ecobrand learn コマンド

use crate::learn::INFO_CARDS;
use owo_colors::OwoColorize;

pub fn run() -> Result<(), String> {
    println!("{}", "Learn About Sustainable Fashion".bold().green());
    for card in INFO_CARDS.iter() {
        println!();
        println!("{}", card.title.bold());
        println!("  {}", card.content);
    }
    println!();
    println!("Test your knowledge with `ecobrand quiz`.");
    Ok(())
}
