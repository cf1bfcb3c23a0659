//! Customizing SNBT formatting: precision, key sorting, and spacing.
//!
//! Run with: cargo run --example custom_options

use snbt::{nbt, to_string, to_string_with_options, SnbtOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let tree = nbt!({
        "Pos": [100.123456, 64.0, -200.654321],
        "yaw": 93.75,
        "id": "minecraft:marker"
    });

    // Default: three decimal places, sorted keys, spaces after punctuation
    println!("Default:\n{}\n", to_string(&tree));

    // Coarser float precision
    let coarse = SnbtOptions::new().with_float_precision(1);
    println!(
        "Precision 1:\n{}\n",
        to_string_with_options(&tree, &coarse)
    );

    // Keep insertion order instead of sorting
    let unsorted = SnbtOptions::new().with_sort_keys(false);
    println!(
        "Insertion order:\n{}\n",
        to_string_with_options(&tree, &unsorted)
    );

    // Compact output for command-length budgets
    let compact = SnbtOptions::new().with_spaces(false);
    println!("Compact:\n{}", to_string_with_options(&tree, &compact));

    Ok(())
}
