//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::Serialize;
use snbt::{nbt, nbt_compound, to_string, to_value, Value};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Marker {
    id: String,
    #[serde(rename = "Invisible")]
    invisible: bool,
    #[serde(rename = "Tags")]
    tags: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build a tree dynamically with the nbt! macro
    let spawn_data = nbt!({
        "id": "minecraft:zombie",
        "Health": 20,
        "HandItems": [{"id": "minecraft:iron_sword", "Count": 1}, {}],
        "IsBaby": false
    });

    println!("Spawn data as SNBT:\n{}\n", to_string(&spawn_data));

    // Access values dynamically
    if let Value::Compound(nbt) = &spawn_data {
        if let Some(id) = nbt.get("id").and_then(|v| v.as_str()) {
            println!("Accessing field 'id': {id}");
        }

        if let Some(health) = nbt.get("Health").and_then(|v| v.as_i64()) {
            println!("Accessing field 'Health': {health}");
        }

        if let Some(Value::List(hands)) = nbt.get("HandItems") {
            println!("Accessing field 'HandItems': {} slots\n", hands.len());
        }
    }

    // Convert an existing struct to a Value
    let marker = Marker {
        id: "minecraft:armor_stand".to_string(),
        invisible: true,
        tags: vec!["waypoint".to_string(), "spawn".to_string()],
    };

    let marker_value = to_value(&marker)?;
    println!("Marker as SNBT:\n{}\n", to_string(&marker_value));

    // Runtime type checking
    println!("Type checks:");
    println!("  is_compound: {}", marker_value.is_compound());
    println!("  is_list:     {}", marker_value.is_list());
    println!("  is_string:   {}", marker_value.is_string());

    // Merging trees at runtime
    let base = nbt_compound!({"Health": 20, "display": {"Name": "Base"}});
    let patch = nbt_compound!({"display": {"Name": "Patched"}});
    println!("\nMerged: {}", base.merge(&patch));

    Ok(())
}
