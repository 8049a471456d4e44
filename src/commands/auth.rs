//! ecobrand auth コマンド
//!
//! ローカルアカウントの作成・サインイン・サインアウト。

use super::Context;
use crate::output::success;
use chrono::Utc;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Create an account and sign in
    Signup {
        /// Email address
        email: String,
    },
    /// Sign in to the existing account
    Signin {
        /// Email address
        email: String,
    },
    /// Sign out (the account is kept)
    Signout,
    /// Show the signed-in user
    Whoami,
}

pub fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let identity = &ctx.identity;
    match args.command {
        AuthCommand::Signup { email } => {
            let user = identity
                .sign_up(&email, Utc::now())
                .map_err(|e| e.to_string())?;
            success(&format!("Signed up as {}", user.email));
        }
        AuthCommand::Signin { email } => {
            let user = identity.sign_in(&email).map_err(|e| e.to_string())?;
            success(&format!("Signed in as {}", user.email));
        }
        AuthCommand::Signout => {
            if identity.sign_out().map_err(|e| e.to_string())? {
                success("Signed out.");
            } else {
                println!("Not signed in.");
            }
        }
        AuthCommand::Whoami => match ctx.current_user()? {
            Some(user) => println!("{} {}", user.email.bold(), format!("(id: {})", user.id).dimmed()),
            None => println!("Not signed in. Brands you add will be owned by guest."),
        },
    }
    Ok(())
}
