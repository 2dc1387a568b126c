//! The user dashboard: profile, wallet balances and a top-five market strip.
//! With `--watch` the strip re-fetches every five seconds until Ctrl-C.

use std::sync::Arc;

use tracing::warn;

use crate::models::market::MarketTicker;
use crate::models::wallet::{UserInfo, WalletKind};
use crate::services::refresh;
use crate::store::{with_loading, STORE};
use crate::utils::table::Table;

use super::{api_error_message, authed_client};

const TOP_TICKERS: usize = 5;

pub async fn execute(args: &[String]) -> Result<(), String> {
    let watch = args.iter().any(|a| a == "--watch");
    let client = authed_client()?;

    let user = with_loading(&STORE, client.get_user_info())
        .await
        .map_err(|e| api_error_message(&e))?;
    STORE.user.set(user.clone()).await;
    render_profile(&user);

    if !watch {
        // Market data is best-effort: a failure leaves the strip empty and
        // the dashboard still renders.
        match client.get_top_market_data(TOP_TICKERS).await {
            Ok(tickers) => {
                render_market(&tickers);
                STORE.market.replace(tickers).await;
            }
            Err(e) => warn!("Market data fetch failed: {}", e),
        }
    } else {
        let client = Arc::new(client);
        let handle = refresh::start(
            refresh::DEFAULT_PERIOD,
            move || {
                let client = Arc::clone(&client);
                async move { client.get_top_market_data(TOP_TICKERS).await }
            },
            |tickers: Vec<MarketTicker>| async move {
                render_market(&tickers);
                STORE.market.replace(tickers).await;
            },
        );

        println!();
        println!("Refreshing market data every 5s. Press Ctrl-C to stop.");
        tokio::signal::ctrl_c().await.map_err(|e| e.to_string())?;
        handle.stop();
        println!();
    }
    Ok(())
}

fn render_profile(user: &UserInfo) {
    println!("Welcome back, {}!", user.name());
    if !user.refer_code().is_empty() {
        println!("Referral code: {}", user.refer_code());
    }
    println!();
    println!("Wallets:");
    for kind in [WalletKind::Deposit, WalletKind::Incoming, WalletKind::Topup] {
        println!("  {:<9} ${:.2}", kind.label(), user.balance(kind));
    }
}

fn render_market(tickers: &[MarketTicker]) {
    if tickers.is_empty() {
        return;
    }
    println!();
    let mut table = Table::new(vec!["Symbol", "Price", "24h %"])
        .right_align(1)
        .right_align(2);
    for tick in tickers {
        table.add_row(vec![
            tick.symbol().to_string(),
            format!("{:.2}", tick.last_price()),
            format!("{:+.2}%", tick.price_change_percent()),
        ]);
    }
    print!("{}", table.render());
}
