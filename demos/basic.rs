use heavykeeper_sketch::TopK;

fn main() -> Result<(), heavykeeper_sketch::Error> {
    // Create a new TopK with:
    // - k=10 (number of top items to track)
    // - width=1000 (size of hash table, larger values use more memory but reduce collisions)
    // - depth=4 (number of hash functions, more depth increases accuracy but uses more CPU)
    // - decay=0.9 (how readily a colliding bucket gives way; lower values evict faster)
    let mut topk = TopK::builder(1000, 4).capacity(10).decay(0.9).build()?;

    // Add some example items multiple times to show frequency counting
    topk.add("frequent item", 5)?;
    topk.add("less frequent item", 3)?;
    topk.add("rare item", 1)?;

    // Print the items and their counts in order of frequency
    println!("Top items and their frequencies:");
    for node in topk.top_k() {
        println!("{}: {}", String::from_utf8_lossy(&node.item), node.count);
    }

    // Demonstrate the count() method
    let item = "frequent item";
    println!("\nCount for '{}': {:?}", item, topk.count(item));

    // Demonstrate the query() method
    println!("Is '{}' in top-k? {}",
        item,
        if topk.query(item) { "yes" } else { "no" });

    // Dump the internal state without disturbing it
    println!("\n{}", topk);

    Ok(())
}
