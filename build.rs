//! Build script to embed the game word lists
//!
//! Reads the solution and accepted word files and generates Rust source with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Daily solutions, in rotation order
    generate_word_list(
        "data/solutions.txt",
        &Path::new(&out_dir).join("solutions.rs"),
        "SOLUTIONS",
        "Daily solution words, indexed by day",
    );

    // Everything a player may guess
    generate_word_list(
        "data/accepted.txt",
        &Path::new(&out_dir).join("accepted.rs"),
        "ACCEPTED",
        "Accepted guess words (superset of the solutions)",
    );

    println!("cargo:rerun-if-changed=data/solutions.txt");
    println!("cargo:rerun-if-changed=data/accepted.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_ascii_lowercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
