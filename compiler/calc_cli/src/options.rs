//! Argument parsing for `calc`.

/// What the binary should do.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Evaluate each expression given on the command line.
    Evaluate(Vec<String>),
    /// Read expressions from stdin, one per line.
    Repl,
    Help,
}

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    /// Print the session log after each evaluation.
    pub show_log: bool,
    /// Print the statistics panel before exiting.
    pub show_stats: bool,
}

/// Parse arguments (without the program name).
///
/// Flags may appear anywhere. An argument that starts with `-` followed by
/// a digit, `.` or `(` is an expression (`calc -3+5`), not a flag. Use `--`
/// to pass anything after it as an expression.
pub fn parse_args<I, S>(args: I) -> Result<Options, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut expressions = Vec::new();
    let mut show_log = false;
    let mut show_stats = false;
    let mut help = false;
    let mut literal = false;

    for arg in args {
        let arg = arg.as_ref();
        if literal || !is_flag(arg) {
            expressions.push(arg.to_owned());
            continue;
        }
        match arg {
            "--" => literal = true,
            "--log" | "-l" => show_log = true,
            "--stats" | "-s" => show_stats = true,
            "--help" | "-h" => help = true,
            other => return Err(format!("unknown option: {other}")),
        }
    }

    let command = if help {
        Command::Help
    } else if expressions.is_empty() {
        Command::Repl
    } else {
        Command::Evaluate(expressions)
    };
    Ok(Options {
        command,
        show_log,
        show_stats,
    })
}

fn is_flag(arg: &str) -> bool {
    let mut chars = arg.chars();
    chars.next() == Some('-')
        && !matches!(chars.next(), Some(c) if c.is_ascii_digit() || c == '.' || c == '(')
}

pub const USAGE: &str = "\
Usage: calc [options] [expression...]

Evaluates arithmetic expressions with + - * / ** and parentheses.
Without expressions, reads one expression per line from stdin.

Options:
  -l, --log      Print the evaluation log after each result
  -s, --stats    Print operation statistics before exiting
  -h, --help     Show this help
  --             Treat every following argument as an expression

Interactive commands:
  :log     Show the log of the last evaluation
  :stats   Show operation statistics
  :reset   Reset operation statistics
  :help    Show this help
  :quit    Exit";
