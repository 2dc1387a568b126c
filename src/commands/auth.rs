use tracing::info;

use crate::api::PlatformClient;
use crate::services::session::{self, Session};

use super::api_error_message;

/// Verify the supplied token against the profile endpoint, then persist it.
pub async fn login(args: &[String]) -> Result<(), String> {
    let (user_id, token) = match args {
        [user_id, token] => (user_id.clone(), token.clone()),
        _ => return Err("Usage: royalfx-client login <user-id> <token>".to_string()),
    };

    let client = PlatformClient::new(token.clone());
    let user = client
        .get_user_info()
        .await
        .map_err(|e| api_error_message(&e))?;

    session::save(&Session { user_id, token }).map_err(|e| e.to_string())?;
    info!("Session stored at {}", session::session_path().display());
    println!("Logged in as {}.", user.name());
    Ok(())
}

pub async fn logout() -> Result<(), String> {
    session::clear().map_err(|e| e.to_string())?;
    crate::store::STORE.user.clear().await;
    println!("Logged out.");
    Ok(())
}
