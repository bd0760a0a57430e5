//! `calc` - evaluate arithmetic expressions from the command line.

use std::io;

use calc_cli::options::USAGE;
use calc_cli::repl::Frontend;
use calc_cli::tracing_setup::init_tracing;
use calc_cli::{parse_args, Command};
use calc_eval::Calculator;

fn main() {
    init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let mut frontend = Frontend::new(
        Calculator::new(),
        options.show_log,
        io::stdout().lock(),
        io::stderr().lock(),
    );

    let outcome = match &options.command {
        Command::Help => {
            println!("{USAGE}");
            return;
        }
        Command::Evaluate(expressions) => frontend.evaluate_all(expressions),
        Command::Repl => frontend.run_interactive(io::stdin().lock()).map(|()| true),
    };

    let all_ok = match outcome {
        Ok(all_ok) => all_ok,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if options.show_stats {
        if let Err(err) = frontend.print_stats() {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }

    if !all_ok {
        std::process::exit(1);
    }
}
