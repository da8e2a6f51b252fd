use comfy_table::{ContentArrangement, Table};

use arcana_core::SPREADS;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Cards", "Positions"]);

    for spread in &SPREADS {
        let positions = match spread.positions {
            Some(names) => names.join(", "),
            None => "numbered".to_string(),
        };
        table.add_row(vec![spread.name.to_string(), spread.size.to_string(), positions]);
    }

    println!("{table}");
    println!();
    println!("  {} spreads", SPREADS.len());

    Ok(())
}
