//! Builds a small sample tree and prints what the container reports about it
//!
//! Usage:
//!   RUST_LOG=trace cargo run --example sample_tree

use anyhow::Result;
use ntree::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut tree = Tree::from_value(1);
    tree.push(2);
    tree.push(3);
    tree.push(4);
    tree.child_mut(0)?.push(5);
    tree.child_mut(0)?.push(-6);

    let first = tree.child(0)?;
    println!(
        "First child: {:?}, size: {}, height: {}",
        first.get(),
        tree.size(),
        tree.height()
    );
    println!("Nested: {}", tree);
    println!();

    println!("Pre-order:   {:?}", tree.to_vec());
    print!("Visited:     ");
    tree.for_each(|v| print!("{} ", v));
    println!();
    println!("Level order: {:?}", tree.to_vec_bfs());
    for depth in 0..=tree.height() {
        println!("  depth {}: {:?}", depth, tree.to_vec_generation(depth)?);
    }
    println!();

    println!("Generation of root: {}", tree.generation());
    println!("Largest value: {:?}", tree.get_most(|a, b| a > b));
    println!(
        "All values positive: {}",
        tree.all_has_property(|v| *v > 0)
    );
    println!(
        "At least one negative: {}",
        tree.once_has_property(|v| *v < 0)
    );
    println!(
        "First positive: {}",
        tree.first_has_property(|v| *v > 0)?
    );
    println!(
        "Last positive: {}",
        tree.last_has_property(|v| *v > 0)?
    );

    Ok(())
}
