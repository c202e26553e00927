//! Loads a ketama server list, builds the continuum and prints `hash point server` for the keys `0..count`
//!
//! The output can be diffed against other ketama clients to verify that they place keys identically.
//!
//! cargo run --example continuum -- ketama.servers [count]
//! RUST_LOG=debug cargo run --example continuum -- ketama.servers 10

use std::env;
use std::io::{self, BufWriter, Write};
use std::process;

use ketama_continuum::{Continuum, ServerList};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("Usage: continuum <ketama.servers file> [count]");
        process::exit(1);
    };
    let count: u64 = match args.next() {
        Some(count) => count.parse()?,
        None => 1_000_000,
    };

    let servers = ServerList::from_file(&path)?;
    let continuum = Continuum::new(&servers)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for i in 0..count {
        let key = i.to_string();
        let point = continuum.get_point(&key)?;
        let server = &continuum.servers()[point.server];
        writeln!(out, "{} {} {}", continuum.hash(&key), point.value, server.addr)?;
    }
    out.flush()?;

    Ok(())
}
