//! The transaction-history screen: fetch once, then filter/sort/page the
//! records locally. `--interactive` keeps the process alive and feeds typed
//! commands back into the query the way column clicks and the search box do.

use std::io::{self, BufRead, Write};

use crate::models::transaction::{TransactionKind, TransactionRecord, TransactionStatus};
use crate::services::table::{SortField, SortOrder, TableQuery, TableView};
use crate::store::{with_loading, STORE};
use crate::utils::page::render_strip;
use crate::utils::table::Table;

use super::{api_error_message, authed_client};

const MAX_VISIBLE_PAGES: usize = 5;

pub async fn execute(args: &[String]) -> Result<(), String> {
    let mut query = TableQuery::default();
    let mut interactive = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--search" => {
                let term = iter
                    .next()
                    .ok_or("--search requires a term".to_string())?;
                query.set_search(term.clone());
            }
            "--sort" => {
                let raw = iter.next().ok_or("--sort requires a field".to_string())?;
                let field = SortField::parse(raw)
                    .ok_or(format!("Unknown sort field '{}'. Use: user, type, amount, status, date", raw))?;
                query.sort_field = Some(field);
            }
            "--order" => {
                query.sort_order = match iter
                    .next()
                    .ok_or("--order requires asc or desc".to_string())?
                    .as_str()
                {
                    "asc" => SortOrder::Asc,
                    "desc" => SortOrder::Desc,
                    other => return Err(format!("Unknown sort order '{}'", other)),
                };
            }
            "--page" => {
                query.current_page = parse_number(iter.next(), "--page")?;
            }
            "--rows" => {
                let rows = parse_number(iter.next(), "--rows")?;
                query.set_rows_per_page(rows);
            }
            "--interactive" => interactive = true,
            other => return Err(format!("Unknown option '{}'", other)),
        }
    }

    let client = authed_client()?;
    let records = with_loading(&STORE, client.get_transaction_history())
        .await
        .map_err(|e| api_error_message(&e))?;

    let view = TableView::build(&records, &query);
    render(&view, &query);

    if interactive {
        run_interactive(&records, query)?;
    }
    Ok(())
}

fn parse_number(raw: Option<&String>, flag: &str) -> Result<usize, String> {
    raw.ok_or(format!("{} requires a number", flag))?
        .parse::<usize>()
        .map_err(|_| format!("{} requires a number", flag))
}

/// Read pipeline commands from stdin until `q`.
fn run_interactive(records: &[TransactionRecord], mut query: TableQuery) -> Result<(), String> {
    println!();
    println!("Commands: n(ext) p(rev) f(irst) l(ast), page <n>, rows <n>,");
    println!("          sort <field>, search <term>, clear, q(uit)");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            return Ok(());
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let total = TableView::build(records, &query).total_pages;

        match tokens.as_slice() {
            [] => continue,
            ["q"] | ["quit"] => return Ok(()),
            ["n"] | ["next"] => query.next_page(total),
            ["p"] | ["prev"] => query.prev_page(),
            ["f"] | ["first"] => query.first_page(),
            ["l"] | ["last"] => query.last_page(total),
            ["page", n] => match n.parse::<usize>() {
                Ok(n) => query.jump_to(n, total),
                Err(_) => {
                    println!("page needs a number");
                    continue;
                }
            },
            ["rows", n] => match n.parse::<usize>() {
                Ok(n) if n > 0 => query.set_rows_per_page(n),
                _ => {
                    println!("rows needs a positive number");
                    continue;
                }
            },
            ["sort", raw] => match SortField::parse(raw) {
                // Repeating the active field flips the direction, like
                // clicking the column header again.
                Some(field) => query.toggle_sort(field),
                None => {
                    println!("Unknown sort field '{}'", raw);
                    continue;
                }
            },
            ["search", rest @ ..] => query.set_search(rest.join(" ")),
            ["clear"] => query.set_search(""),
            other => {
                println!("Unknown command '{}'", other.join(" "));
                continue;
            }
        }

        let view = TableView::build(records, &query);
        query.current_page = view.page;
        render(&view, &query);
    }
}

fn user_cell(record: &TransactionRecord) -> String {
    if record.user_name().is_empty() {
        return "N/A".to_string();
    }
    if record.user_id().is_empty() {
        return record.user_name().to_string();
    }
    format!("{} ({})", record.user_name(), record.user_id())
}

// Known types and statuses render with their canonical label; anything the
// backend invents comes through raw.
fn kind_cell(record: &TransactionRecord) -> String {
    match record.kind() {
        TransactionKind::Other => record.kind_raw().to_string(),
        known => known.label().to_string(),
    }
}

fn status_cell(record: &TransactionRecord) -> String {
    match record.status() {
        TransactionStatus::Other => record.status_raw().to_string(),
        known => known.label().to_string(),
    }
}

fn render(view: &TableView, query: &TableQuery) {
    println!();
    println!("Transaction History");
    println!("Total Amount: ${:.2}", view.total_amount);

    if view.is_empty() {
        if query.search_term.is_empty() {
            println!("No transaction history available.");
        } else {
            println!("No results match your search criteria.");
        }
        return;
    }

    let mut table = Table::new(vec!["User", "Type", "Amount", "From -> To", "Status", "Date"])
        .right_align(2);
    for record in &view.rows {
        table.add_row(vec![
            user_cell(record),
            kind_cell(record),
            format!("${}", record.amount_text()),
            format!("{} -> {}", record.from_wallet(), record.to_wallet()),
            status_cell(record),
            record.created_at().format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }
    print!("{}", table.render());

    let shown_from = view.start_index + 1;
    let shown_to = (view.start_index + query.rows_per_page).min(view.filtered_count);
    println!(
        "Showing {} to {} of {} entries",
        shown_from, shown_to, view.filtered_count
    );
    let strip = render_strip(view.page, view.total_pages, MAX_VISIBLE_PAGES);
    if !strip.is_empty() {
        println!("Pages: {}", strip);
    }
}
