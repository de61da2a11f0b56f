use crate::models::Dataset;
use crate::resolver::{locations_for_soil_type, soil_type_options};
use comfy_table::{Attribute, Cell, CellAlignment, Table};

fn header(label: &str) -> Cell {
    Cell::new(label)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)
}

/// One row per soil type, in order of first appearance.
pub fn summary_table(dataset: &Dataset) -> Table {
    let mut table = Table::new();
    table
        .set_header(vec![
            header(""),
            header("Soil Type"),
            header("Rows"),
            header("Locations"),
            header("USCS"),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    for soil_type in soil_type_options(dataset) {
        let rows: Vec<_> = dataset
            .records()
            .iter()
            .filter(|r| r.soil_type == soil_type)
            .collect();
        let locations = locations_for_soil_type(dataset, soil_type).len();

        let mut symbols: Vec<&str> = rows.iter().map(|r| r.uscs_symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();

        // Flag soil types with rows that cannot be placed on the map
        let unplaced = rows.iter().any(|r| r.coordinates().is_none());
        table.add_row(vec![
            Cell::new(if unplaced { "⚠️" } else { "✅" }).set_alignment(CellAlignment::Center),
            Cell::new(soil_type),
            Cell::new(rows.len()).set_alignment(CellAlignment::Center),
            Cell::new(locations).set_alignment(CellAlignment::Center),
            Cell::new(symbols.join(", ")),
        ]);
    }

    table
}

/// Warnings for rows whose coordinates do not parse.
pub fn coordinate_warnings(dataset: &Dataset) -> Vec<String> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.coordinates().is_none())
        .map(|(i, r)| {
            format!(
                "  ⚠️ Row {} ({}): coordinates '{}', '{}' are not numeric, no map marker",
                i + 1,
                r.location,
                r.latitude,
                r.longitude
            )
        })
        .collect()
}

pub fn print_dataset_summary(dataset: &Dataset) {
    println!(
        "\n📦 {} rows, {} columns, {} locations",
        dataset.len(),
        dataset.headers().len(),
        crate::resolver::distinct_locations(dataset).len()
    );
    println!("\nSoil type summary:\n{}", summary_table(dataset));

    let warnings = coordinate_warnings(dataset);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for warning in warnings {
            println!("{}", warning);
        }
    }

    println!();
}
