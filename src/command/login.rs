use anyhow::{Context, Result};

use crate::api::AuthenticatedClient;
use crate::config;
use crate::session::SessionStore;

pub async fn run_login(token: Option<String>, config_dir: Option<String>) -> Result<()> {
    let session_store = SessionStore::new(config_dir)?;

    // Check if already logged in
    if session_store.is_logged_in() {
        println!("⚠️  You are already logged in to the registry.");
        println!("Logging in again will replace your current session.\n");

        print!("Do you want to continue with a new login? This will replace your existing session. [y/N]: ");
        use std::io::{self, Write};
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        let answer = answer.trim().to_lowercase();

        if answer != "y" && answer != "yes" {
            println!("Login cancelled. Your existing session remains active.");
            return Ok(());
        }
    }

    let token = match token {
        Some(token) => token,
        None => {
            println!("🔐 Paste an access token from your registry account settings.\n");

            print!("Access token: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut pasted = String::new();
            io::stdin().read_line(&mut pasted)?;
            pasted.trim().to_string()
        }
    };

    if token.is_empty() {
        anyhow::bail!("No token provided");
    }

    // Validate the token against the registry before saving anything
    let client = AuthenticatedClient::new(config::registry_base_url(), token.clone());
    let profile = client
        .fetch_profile()
        .await
        .context("Token validation failed")?;

    session_store.save_session(&token, profile.name.as_deref())?;

    match profile.name {
        Some(name) => println!("\n✅ Logged in to the registry as {}.", name),
        None => println!("\n✅ Logged in to the registry."),
    }

    Ok(())
}
