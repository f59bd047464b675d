//! Raw data viewer: shows the table a page at a time while the user keeps saying yes.

use crate::errors::AppResult;
use crate::models::{City, Trip, TripTable};
use crate::ui::prompt::{Prompter, parse_yes_no};
use crate::utils::formatting::format_duration_cell;
use crate::utils::table::{Column, Table};
use std::io::{BufRead, Write};

pub const END_OF_DATA: &str = "No more raw data to display.";

fn first_prompt(page_size: usize) -> String {
    format!("\nDo you want to see the first {page_size} lines of raw data? Yes or No")
}

fn more_prompt(page_size: usize) -> String {
    format!("\nDo you want to view {page_size} more lines of raw data? Yes or No")
}

/// Render one window of trips as an aligned text table.
pub fn render_page(city: City, trips: &[Trip]) -> String {
    let mut columns = vec![
        Column::right(""),
        Column::left("Start Time"),
        Column::left("End Time"),
        Column::right("Trip Duration"),
        Column::left("Start Station"),
        Column::left("End Station"),
        Column::left("User Type"),
    ];
    if city.has_demographics() {
        columns.push(Column::left("Gender"));
        columns.push(Column::right("Birth Year"));
    }

    let mut table = Table::new(columns);
    for t in trips {
        let mut row = vec![
            t.row.to_string(),
            t.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            t.end_time
                .map(|e| e.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "--".into()),
            format_duration_cell(t.trip_duration),
            t.start_station.clone(),
            t.end_station.clone(),
            t.user_type.clone().unwrap_or_else(|| "--".into()),
        ];
        if city.has_demographics() {
            row.push(t.gender.clone().unwrap_or_else(|| "--".into()));
            row.push(
                t.birth_year
                    .map(|y| (y as i64).to_string())
                    .unwrap_or_else(|| "--".into()),
            );
        }
        table.add_row(row);
    }
    table.render()
}

/// Ask whether to show raw data and page through `table` while the answer is yes.
/// The first question is repeated until it gets a yes or no; after that, any
/// answer other than yes stops. Returns the number of pages shown.
pub fn raw_data<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    table: &TripTable,
    page_size: usize,
    separator: &str,
) -> AppResult<usize> {
    let mut shown = 0;

    if prompter.ask_yes_no(&first_prompt(page_size))? {
        let mut pages = table.trips().chunks(page_size.max(1)).peekable();

        while let Some(page) = pages.next() {
            write!(prompter.out(), "{}", render_page(table.city, page))?;
            shown += 1;

            if pages.peek().is_none() {
                writeln!(prompter.out(), "{END_OF_DATA}")?;
                break;
            }

            let answer = prompter.read_answer(&more_prompt(page_size))?;
            if parse_yes_no(&answer) != Some(true) {
                break;
            }
        }

        if shown == 0 {
            writeln!(prompter.out(), "{END_OF_DATA}")?;
        }
    }

    writeln!(prompter.out(), "{separator}")?;
    log::debug!("raw data pager showed {shown} page(s)");
    Ok(shown)
}
