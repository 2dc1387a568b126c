use crate::models::wallet::WalletKind;
use crate::services::transfer;
use crate::store::{with_loading, STORE};

use super::{api_error_message, authed_client};

pub async fn execute(args: &[String]) -> Result<(), String> {
    let (wallet, amount) = match args {
        [wallet, amount] => (wallet, amount),
        _ => return Err("Usage: royalfx-client transfer <deposit|incoming> <amount>".to_string()),
    };

    let source = WalletKind::parse(wallet)
        .ok_or(format!("Unknown wallet '{}'. Use deposit or incoming.", wallet))?;
    if source == WalletKind::Topup {
        return Err("The topup wallet is the destination; transfer from deposit or incoming.".to_string());
    }

    let client = authed_client()?;
    let user = with_loading(&STORE, client.get_user_info())
        .await
        .map_err(|e| api_error_message(&e))?;

    let request = transfer::build_transfer(amount, source, user.balance(source))
        .map_err(|e| e.to_string())?;

    let message = with_loading(&STORE, client.transfer_to_topup(&request))
        .await
        .map_err(|e| api_error_message(&e))?;
    println!("{}", message);

    // Refresh balances after the transfer, like the web client does.
    let user = with_loading(&STORE, client.get_user_info())
        .await
        .map_err(|e| api_error_message(&e))?;
    STORE.user.set(user.clone()).await;
    println!(
        "Topup wallet balance: ${:.2}",
        user.balance(WalletKind::Topup)
    );
    Ok(())
}
