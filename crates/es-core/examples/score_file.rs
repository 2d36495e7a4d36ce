//! Example: score a file in block mode with both probability methods.
//!
//! Usage:
//!   cargo run -p es-core --example score_file -- Cargo.toml
//!   cargo run -p es-core --example score_file -- /bin/ls

use std::fs::File;

use es_core::{scan, BlockReader, Method};

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: score_file <path>");
        std::process::exit(1);
    });

    let block_size = 256;

    for (name, method) in [("local", Method::Local), ("global", Method::Global)] {
        let file = File::open(&path).expect("failed to open file");
        let mut reader = BlockReader::new(file, block_size);

        let mut blocks = 0u64;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        scan(&mut reader, method, 2, |_, value| {
            blocks += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        })
        .expect("scan failed");

        println!("=== {} probabilities ({}-byte blocks) ===", name, block_size);
        if blocks == 0 {
            println!("empty file, nothing to score");
            continue;
        }
        println!("blocks : {}", blocks);
        println!("mean   : {:.3} bits", sum / blocks as f64);
        println!("min    : {:.3} bits", min);
        println!("max    : {:.3} bits", max);
        println!();
    }
}
