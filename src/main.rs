//! Paper-Pagination CLI (for testing purposes only)
//! The main interface is through WASM bindings.

use std::env;
use std::process::ExitCode;

use paper_pagination::{ControlStrip, NavigationIntent, PaginationConfig, PaginationError};

fn parse_arg(
    args: &[String],
    index: usize,
    name: &str,
    default: usize,
) -> Result<usize, PaginationError> {
    match args.get(index) {
        Some(raw) => raw.parse().map_err(|_| {
            PaginationError::InvalidArgument(format!(
                "{} must be a non-negative integer, got '{}'",
                name, raw
            ))
        }),
        None => Ok(default),
    }
}

fn run(args: &[String]) -> Result<String, PaginationError> {
    let items = parse_arg(args, 1, "items", 200)?;
    let per_page = parse_arg(args, 2, "per-page", 10)?;
    let range = parse_arg(args, 3, "range", 5)?;
    let page = parse_arg(args, 4, "page", 0)?;

    let config = PaginationConfig {
        items_per_page: per_page,
        range,
        ..Default::default()
    };
    let mut state = config.state_for(items)?;
    if state.page_count() > 0 {
        state.apply(NavigationIntent::SelectPage(page))?;
    }

    let strip = ControlStrip::build(&state, &config)?;
    Ok(format!(
        "page {} of {}\n{}",
        state.current_page() + 1,
        state.page_count(),
        strip
    ))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("Paper-Pagination Control Core");
        println!("=============================");
        println!();
        println!("usage: paper-pagination [items] [per-page] [range] [page-index]");
        println!();
        println!("This is a library crate. To use it:");
        println!("  1. Build WASM: wasm-pack build --target web");
        println!("  2. Import WasmPagination from the generated package");
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
