// crates/mangler/src/main.rs

use std::env;
use std::process;

use mangler::mangle;

fn main() {
    // Expect exactly one argument: the name to mangle.
    let args: Vec<_> = env::args_os().collect();
    if args.len() != 2 {
        let program = args
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mangler".to_string());
        eprintln!("Usage: {} <name>", program);
        process::exit(1);
    }

    match args[1].to_str() {
        Some(name) => println!("{}", mangle(name)),
        None => {
            eprintln!("Error: Unicode failure in {:?}", args[1]);
            process::exit(1);
        }
    }
}
