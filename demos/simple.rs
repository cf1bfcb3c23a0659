//! Building an NBT tree and printing its SNBT text.
//!
//! Run with: cargo run --example simple

use snbt::{nbt, to_string, Compound};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Build a tree with the nbt! macro
    let entity = nbt!({
        "id": "minecraft:creeper",
        "Health": 20,
        "Motion": [0, 1, 0],
        "powered": true,
        "CustomName": "Boomer"
    });

    println!("SNBT output:\n{}\n", to_string(&entity));

    // Or build it incrementally with the Compound API
    let mut item = Compound::new();
    item.insert("id", "minecraft:diamond_sword")?;
    item.set_or_clear("display.Name", "The Cleaver")?;
    item.get_list_mut("Tags")?.push("quest_reward".into());

    println!("Item SNBT:\n{}", item);

    Ok(())
}
