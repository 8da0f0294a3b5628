use anyhow::Result;

use crate::config;
use crate::metadata::MetadataManager;
use crate::session::{SessionStore, TOKEN_ENV};

pub async fn run_status() -> Result<()> {
    let env_token = std::env::var(TOKEN_ENV).unwrap_or_default();

    if !env_token.is_empty() {
        println!("✅ Using access token from {}", TOKEN_ENV);
    } else {
        let session_store = SessionStore::new(None)?;
        match session_store.get_session()? {
            Some(session) => {
                println!("✅ Logged in to the registry");
                if let Some(user) = session.user {
                    println!("   User: {}", user);
                }
            }
            None => {
                if session_store.session_path().exists() {
                    println!("⚠️  Session file exists but is invalid, removing it.");
                    session_store.remove_session()?;
                }
                println!("❌ Not logged in to the registry");
                println!("   Run 'atelier login' to authenticate.");
            }
        }
    }

    println!("   Registry: {}", config::registry_base_url());

    let metadata = MetadataManager::new(None)?.read_metadata()?;
    if let Some(last_synced) = metadata.last_synced {
        println!("   Last sync: {} ({} runs)", last_synced, metadata.sync_count);
    }

    Ok(())
}
