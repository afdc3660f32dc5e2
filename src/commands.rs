//! Command implementations over an acquired rate snapshot.

use crate::converter;
use crate::rates::{RateSnapshot, RateSource};
use crate::ui;
use anyhow::Result;
use comfy_table::Cell;

/// Converts an amount between two currencies and prints the result.
pub fn run_convert(snapshot: &RateSnapshot, amount: f64, from: &str, to: &str) -> Result<()> {
    let from = from.to_uppercase();
    let to = to.to_uppercase();

    let result = converter::convert(amount, &from, &to, &snapshot.table)?;
    println!("{}", render_conversion(amount, &from, result, &to));

    if snapshot.source == RateSource::Local {
        println!(
            "{}",
            ui::style_text("(using local fallback rates)", ui::StyleType::Subtle)
        );
    }
    Ok(())
}

/// Prints the full rate table.
pub fn run_rates(snapshot: &RateSnapshot) -> Result<()> {
    println!("{}", render_rates_table(snapshot));
    Ok(())
}

pub fn render_conversion(amount: f64, from: &str, result: f64, to: &str) -> String {
    format!(
        "{amount:.2} {from} = {} {to}",
        ui::style_text(&format!("{result:.2}"), ui::StyleType::ResultValue)
    )
}

pub fn render_rates_table(snapshot: &RateSnapshot) -> String {
    let base = &snapshot.base_currency;

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Value ({base})")),
    ]);

    for rate in snapshot.table.iter() {
        let value = if rate.value_in_base == 0.0 {
            ui::value_cell("N/A")
        } else {
            ui::value_cell(&format!("{:.4}", rate.value_in_base))
        };
        table.add_row(vec![
            Cell::new(&rate.code),
            Cell::new(&rate.display_name),
            value,
        ]);
    }

    let mut output = format!(
        "{}\n\n",
        ui::style_text(&format!("Exchange rates against {base}"), ui::StyleType::Title)
    );
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{}",
        ui::style_text(
            &format!(
                "Source: {} rates, fetched {}",
                snapshot.source,
                snapshot.fetched_at.format("%Y-%m-%d %H:%M UTC")
            ),
            ui::StyleType::Subtle
        )
    ));

    output
}
