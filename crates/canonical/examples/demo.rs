use canonical::{normalize, words};
use std::io::{self, Read};

fn main() -> io::Result<()> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;

    let normalized = normalize(&content);
    println!("normalized: {normalized}");
    println!();
    println!("words: {}", words(&content).count());
    println!("bytes: {} -> {}", content.len(), normalized.len());
    Ok(())
}
