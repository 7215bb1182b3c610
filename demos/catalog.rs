//! Catalog example - looking up format rules by tag
//!
//! Usage: `cargo run --example catalog -- <tag> <value>...`
//!
//! Without arguments, lists every tag in the catalog.

use std::env;
use std::process::ExitCode;

use tideline::is;
use tideline::prelude::*;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(tag) = args.next() else {
        println!("Available rules:");
        for rule in is::ALL {
            println!("  {}", rule.message());
        }
        return ExitCode::SUCCESS;
    };

    let Some(rule) = is::by_tag(&tag) else {
        eprintln!("unknown rule: {tag}");
        return ExitCode::FAILURE;
    };

    let mut failed = false;
    for value in args {
        match rule.validate(&value) {
            Ok(()) => println!("ok      {value:?}"),
            Err(err) => {
                failed = true;
                println!("{:<7} {value:?}", err.to_string());
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
