use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Location", "Exits", "Items"]);
    for location in world.locations() {
        let exits = location
            .exits
            .iter()
            .map(|(name, to)| format!("{name} -> {to}"))
            .collect::<Vec<_>>()
            .join("\n");
        let items = location.items.keys().cloned().collect::<Vec<_>>().join(", ");
        table.add_row(vec![
            location.id.to_string(),
            location.brief_description.clone(),
            exits,
            items,
        ]);
    }

    println!("{table}");
    println!("  {}", "All checks passed.".green());
    println!(
        "  {} locations, {} items",
        world.location_count(),
        world.item_count()
    );

    Ok(())
}
