pub fn print() {
    println!("royalfx-client - terminal client for the Royal Fx platform");
    println!();
    println!("Usage: royalfx-client <command> [options]");
    println!();
    println!("Commands:");
    println!("  login <user-id> <token>      Store a session after verifying the token");
    println!("  logout                       Clear the stored session");
    println!("  dashboard [--watch]          Profile, balances and top market tickers");
    println!("                               (--watch refreshes the market strip every 5s)");
    println!("  plans                        List available investment plans");
    println!("  plans buy <plan-id> <amount> Purchase a plan (amount in steps of 100)");
    println!("  transfer <wallet> <amount>   Move funds into the topup wallet");
    println!("                               (wallet: deposit | incoming)");
    println!("  history [options]            Transaction history table");
    println!("      --search <term>          Filter by user, type, status or amount");
    println!("      --sort <field>           user | type | amount | status | date");
    println!("      --order <asc|desc>       Sort direction (default asc)");
    println!("      --page <n> --rows <n>    Pagination (default page 1, 10 rows)");
    println!("      --interactive            Browse with n/p/f/l, sort, search commands");
    println!("  admin stats                  Platform-wide aggregate statistics");
    println!("  profit preview <file> [--page <n>]");
    println!("                               Preview a daily-profit workbook");
    println!("  profit upload <file>         Upload the workbook to the backend");
    println!("  help                         Show this message");
}
