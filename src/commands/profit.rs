//! Daily-profit workbook screens: preview the parsed sheet, upload the raw
//! file. A failed upload has to be retried wholesale with the same command.

use std::path::Path;

use crate::services::profit;
use crate::store::{with_loading, STORE};
use crate::utils::page::render_strip;
use crate::utils::table::Table;

use super::{api_error_message, authed_client};

const ROWS_PER_PAGE: usize = 10;
const MAX_VISIBLE_PAGES: usize = 5;

pub async fn execute(args: &[String]) -> Result<(), String> {
    match args.first().map(|s| s.as_str()) {
        Some("preview") => preview(args.get(1..).unwrap_or(&[])),
        Some("upload") => upload(args.get(1..).unwrap_or(&[])).await,
        _ => Err("Usage: royalfx-client profit <preview|upload> <file>".to_string()),
    }
}

fn preview(args: &[String]) -> Result<(), String> {
    let file = args
        .first()
        .ok_or("Please select an Excel file to upload.".to_string())?;
    let mut page = 1;
    if let Some(pos) = args.iter().position(|a| a == "--page") {
        page = args
            .get(pos + 1)
            .and_then(|n| n.parse::<usize>().ok())
            .ok_or("--page requires a number".to_string())?;
    }

    let sheet = profit::read_sheet(Path::new(file)).map_err(|e| e.to_string())?;
    if sheet.headers.is_empty() {
        println!("No data found in the selected file.");
        return Ok(());
    }

    let headers: Vec<&str> = sheet.headers.iter().map(|h| h.as_str()).collect();
    let mut table = Table::new(headers);
    for row in sheet.preview_page(page, ROWS_PER_PAGE) {
        table.add_row(row.clone());
    }
    println!("Daily Profit Data Preview");
    print!("{}", table.render());

    let total_pages = sheet.total_pages(ROWS_PER_PAGE);
    let strip = render_strip(
        crate::services::table::clamp_page(page, total_pages),
        total_pages,
        MAX_VISIBLE_PAGES,
    );
    if !strip.is_empty() {
        println!("Pages: {}", strip);
    }
    Ok(())
}

async fn upload(args: &[String]) -> Result<(), String> {
    let file = args
        .first()
        .ok_or("Please select an Excel file to upload.".to_string())?;

    // The payload is the raw workbook bytes; parsing here is only a sanity
    // check that the file is actually a readable sheet.
    profit::read_sheet(Path::new(file)).map_err(|e| e.to_string())?;
    let payload = profit::encode_for_upload(Path::new(file)).map_err(|e| e.to_string())?;

    let client = authed_client()?;
    let message = with_loading(&STORE, client.upload_profit_sheet(payload))
        .await
        .map_err(|e| format!("Upload failed. Please try again. ({})", api_error_message(&e)))?;
    println!("{}", message);
    Ok(())
}
