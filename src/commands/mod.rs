pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod help;
pub mod history;
pub mod plans;
pub mod profit;
pub mod transfer;

use crate::api::{ApiError, PlatformClient};
use crate::services::session;
use crate::utils::errors::extract_clean_error;

/// Dispatch one invocation to its command module.
pub async fn dispatch(args: &[String]) -> Result<(), String> {
    let command = args.first().map(|s| s.as_str()).unwrap_or("help");
    let rest: &[String] = args.get(1..).unwrap_or(&[]);

    match command {
        "login" => auth::login(rest).await,
        "logout" => auth::logout().await,
        "admin" => admin::execute(rest).await,
        "dashboard" => dashboard::execute(rest).await,
        "plans" => plans::execute(rest).await,
        "transfer" => transfer::execute(rest).await,
        "history" => history::execute(rest).await,
        "profit" => profit::execute(rest).await,
        "help" | "--help" | "-h" => {
            help::print();
            Ok(())
        }
        other => Err(format!(
            "Unknown command '{}'. Run `royalfx-client help` for usage.",
            other
        )),
    }
}

/// Build a client from the stored session, or tell the user to log in.
pub(crate) fn authed_client() -> Result<PlatformClient, String> {
    let session = session::load().ok_or_else(|| {
        "You are not logged in. Run `royalfx-client login <user-id> <token>` first.".to_string()
    })?;
    Ok(PlatformClient::new(session.token))
}

/// The message a failed request shows the user.
pub(crate) fn api_error_message(err: &ApiError) -> String {
    match err {
        ApiError::RequestError(msg) | ApiError::DeserializationError(msg) => {
            format!("Network error: {}", extract_clean_error(msg))
        }
        other => other.user_message(),
    }
}
