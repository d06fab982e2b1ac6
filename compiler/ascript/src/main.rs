//! ascript command-line driver.

use ascript::commands::{
    describe_outcome, parse_literals, print_report, render_error, run_file, tokens_report,
};
use ascript::{MapHost, ScriptResult, StdoutSink};

fn main() {
    ascript::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "tokens" => {
            if args.len() != 3 {
                eprintln!("Usage: ascript tokens <file>");
                std::process::exit(1);
            }
            tokens_report(&args[2]).map(|report| print!("{report}"))
        }
        "print" => {
            if args.len() != 3 {
                eprintln!("Usage: ascript print <file>");
                std::process::exit(1);
            }
            print_report(&args[2]).map(|report| print!("{report}"))
        }
        "run" => {
            if args.len() < 4 {
                eprintln!("Usage: ascript run <file> <function> [args...]");
                eprintln!();
                eprintln!("Arguments are literals: 3, -2.5, true, \"text\"");
                std::process::exit(1);
            }
            run(&args[2], &args[3], &args[4..])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{}", render_error(&err));
        std::process::exit(1);
    }
}

fn run(path: &str, function: &str, raw_args: &[String]) -> ScriptResult<()> {
    let args = parse_literals(raw_args)?;
    let mut host = MapHost::new();
    let mut out = StdoutSink;
    let outcome = run_file(path, function, args, &mut host, &mut out)?;
    println!("{function} {}", describe_outcome(&outcome));
    Ok(())
}

fn print_usage() {
    println!("ascript - embeddable scripting language");
    println!();
    println!("Usage: ascript <command> [options]");
    println!();
    println!("Commands:");
    println!("  tokens <file>                    List the tokens of a source file");
    println!("  print <file>                     Dump every function with its blocks");
    println!("  run <file> <function> [args...]  Run a function to completion");
    println!();
    println!("Set RUST_LOG=ascript_eval=debug to trace execution.");
}
