//! `offside` CLI
//!
//! Prints the layout tokens the external scanners produce for each file.

use std::path::Path;

use offside_driver::{config_from_env, init_tracing, layout_file};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        print_usage();
        std::process::exit(1);
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }
    if let Some(flag) = args.iter().find(|arg| arg.starts_with('-')) {
        eprintln!("error: unknown option '{flag}'");
        print_usage();
        std::process::exit(1);
    }

    let config = match config_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let mut failed = false;
    for (i, path) in args.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match layout_file(Path::new(path), config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: offside <file>...");
    eprintln!();
    eprintln!("Prints one `line:col kind` row per layout token.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help    Show this message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  OFFSIDE_LOOKBACK_WINDOW   Bytes scanned back for a line start (default: 50)");
    eprintln!("  OFFSIDE_COMMENT_MARKER    Single-byte comment marker (default: #)");
    eprintln!("  RUST_LOG                  Enable tracing, e.g. offside_scan=trace");
}
