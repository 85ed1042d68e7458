use std::error::Error;
use std::io::{self, Read};
use std::process;

use tracing_subscriber::EnvFilter;

// Reads a `date,weight,flag,note` log from stdin and prints one line per
// entry. Set RUST_LOG=eatwatch_csv=debug to see which fields were coerced.
fn run() -> Result<(), Box<dyn Error>> {
    let mut data = Vec::new();
    io::stdin().read_to_end(&mut data)?;

    let mut rdr = eatwatch_csv::ReaderBuilder::new().trim(true).from_bytes(data);
    // Header row.
    if !rdr.next_row() {
        return Err(From::from("expected a header row, but got none"));
    }
    let mut count = 0;
    while rdr.next_row() {
        let date = rdr.try_read_string()?;
        let weight = rdr.read_float();
        let flag = rdr.read_bool();
        let note = rdr.read_string();
        println!("{}\t{:.1}\t{}\t{:?}", date, weight, flag, note);
        count += 1;
    }
    println!("imported {} entries", count);
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        println!("error importing log: {}", err);
        process::exit(1);
    }
}
