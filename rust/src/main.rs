use std::env;
use std::process;

use tracing_subscriber::EnvFilter;
use uniq::cli::{Outcome, Registry};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let registry = Registry::builtin();

    if args.is_empty() {
        eprintln!("{}", registry.help());
        process::exit(2);
    }

    match registry.dispatch(&args) {
        Ok(Outcome::Print(id)) => println!("{id}"),
        Ok(Outcome::Help(text) | Outcome::Version(text)) => println!("{text}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
