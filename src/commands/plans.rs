use crate::services::purchase;
use crate::store::{with_loading, STORE};
use crate::utils::table::Table;

use super::{api_error_message, authed_client};

pub async fn execute(args: &[String]) -> Result<(), String> {
    match args.first().map(|s| s.as_str()) {
        None => list().await,
        Some("buy") => buy(args.get(1..).unwrap_or(&[])).await,
        Some(other) => Err(format!(
            "Unknown plans subcommand '{}'. Use `plans` or `plans buy <plan-id> <amount>`.",
            other
        )),
    }
}

async fn list() -> Result<(), String> {
    let client = authed_client()?;
    let plans = with_loading(&STORE, client.get_plans())
        .await
        .map_err(|e| api_error_message(&e))?;

    if plans.is_empty() {
        println!("No plans available right now.");
        return Ok(());
    }

    let mut table = Table::new(vec!["Plan ID", "Name", "Daily ROI", "Duration", "Min"])
        .right_align(2)
        .right_align(3)
        .right_align(4);
    for plan in &plans {
        table.add_row(vec![
            plan.id().to_string(),
            plan.name().to_string(),
            format!("{:.2}%", plan.daily_roi()),
            format!("{} days", plan.duration_days()),
            format!("${:.0}", plan.min_investment()),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

async fn buy(args: &[String]) -> Result<(), String> {
    let (plan_id, amount) = match args {
        [plan_id, amount] => (plan_id, amount),
        _ => return Err("Usage: royalfx-client plans buy <plan-id> <amount>".to_string()),
    };

    // Validation failures block the request entirely.
    let request = purchase::build_purchase(plan_id, amount).map_err(|e| e.to_string())?;

    let client = authed_client()?;
    let message = with_loading(&STORE, client.purchase_plan(&request))
        .await
        .map_err(|e| api_error_message(&e))?;
    println!("{}", message);
    Ok(())
}
