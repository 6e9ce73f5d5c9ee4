//! Basic usage example for sqlhint
//!
//! Run with: cargo run --example basic -p sqlhint

use sqlhint::{Metadata, parse_metadata, strip_metadata, wrap_sql};

fn main() {
    let sql = "SELECT * FROM users WHERE id = 1";

    let mut metadata = Metadata::new();
    metadata.insert("user", "admin");
    metadata.insert("transaction", "12345");

    let wrapped = wrap_sql(sql, &metadata);
    println!("Wrapped SQL: {wrapped}");

    let parsed = parse_metadata(&wrapped);
    println!("Parsed metadata:");
    for (key, value) in parsed.iter() {
        println!("  {key} = {value}");
    }

    let clean = strip_metadata(&wrapped);
    println!("Clean SQL: {clean}");
}
