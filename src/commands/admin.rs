use crate::store::{with_loading, STORE};

use super::{api_error_message, authed_client};

/// Admin dashboard aggregates: platform-wide totals in one card.
pub async fn execute(args: &[String]) -> Result<(), String> {
    match args.first().map(|s| s.as_str()) {
        None | Some("stats") => stats().await,
        Some(other) => Err(format!(
            "Unknown admin subcommand '{}'. Use `admin stats`.",
            other
        )),
    }
}

async fn stats() -> Result<(), String> {
    let client = authed_client()?;
    let stats = with_loading(&STORE, client.get_admin_stats())
        .await
        .map_err(|e| api_error_message(&e))?;

    println!("Platform Statistics");
    println!(
        "  Users:       {} ({} active, {} inactive)",
        stats.total_users(),
        stats.active_users(),
        stats.inactive_users()
    );
    println!("  Plans:       {}", stats.total_plans());
    println!("  Investment:  ${:.2}", stats.total_investment());
    println!("  Earning:     ${:.2}", stats.total_earning());
    println!("  Income:      ${:.2}", stats.total_income());
    println!("  Withdrawal:  ${:.2}", stats.total_withdrawal());
    println!("  Brokerage:   ${:.2}", stats.total_brokerage());
    Ok(())
}
