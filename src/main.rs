//! Walks a `SeqList` through every operation and prints the results.

use clap::Parser;
use seq_list::SeqList;

#[derive(Debug, Parser)]
#[command(name = "seq_list", about = "Singly-linked list demo")]
struct Cli {
    /// Values appended to the list, in order.
    #[arg(default_values = ["Apple", "Banana", "Orange", "Grape"])]
    items: Vec<String>,

    /// A value expected to be absent from the list.
    #[arg(long, default_value = "Mango")]
    missing: String,

    /// Position removed in the remove-by-index step.
    #[arg(long, default_value_t = 1)]
    remove_index: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut list: SeqList<String> = SeqList::new();

    println!("=== SeqList Demo ===");

    for item in &cli.items {
        list.add(item.clone())?;
    }

    println!("List after adding elements: {}", list);
    println!("Size: {}", list.len());
    println!("Is empty: {}", list.is_empty());

    println!("\n--- Access elements by index ---");
    for index in [1, 2] {
        println!("Element at index {}: {}", index, list.get(index)?);
    }

    println!("\n--- Check element existence ---");
    if let Some(first) = cli.items.first() {
        println!("Contains '{}': {}", first, list.contains(first));
    }
    println!("Contains '{}': {}", cli.missing, list.contains(&cli.missing));

    println!("\n--- Find element indexes ---");
    if let Some(third) = cli.items.get(2) {
        println!("Index of '{}': {:?}", third, list.index_of(third));
    }
    println!("Index of '{}': {:?}", cli.missing, list.index_of(&cli.missing));

    println!("\n--- Remove element by index ---");
    let removed = list.remove(cli.remove_index)?;
    println!("Removed element at index {}: {}", cli.remove_index, removed);
    println!("List after removal: {}", list);

    println!("\n--- Remove element by value ---");
    if let Some(last) = cli.items.last() {
        println!("'{}' removed: {}", last, list.remove_item(last));
        println!("List after removal: {}", list);
    }

    println!("\n--- Clear list ---");
    list.clear();
    println!("List after clear: {}", list);
    println!("Size: {}", list.len());
    println!("Is empty: {}", list.is_empty());

    println!("\n=== Demo completed successfully ===");
    Ok(())
}
