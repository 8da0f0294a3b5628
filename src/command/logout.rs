use anyhow::Result;

use crate::session::SessionStore;

pub async fn run_logout() -> Result<()> {
    let session_store = SessionStore::new(None)?;

    if !session_store.is_logged_in() {
        println!("You are not logged in.");
        return Ok(());
    }

    session_store.remove_session()?;
    println!("✅ Logged out from the registry.");

    Ok(())
}
