//! arex-drv - Scanner Driver
//!
//! The driver acquires lines of input, runs one scan session per line, and
//! reports every recognized token to stdout in the form
//! `Next token is: <KIND>, Next lexeme is <text>`. Diagnostics collected
//! during a session (over-long lexemes, unexpected characters) are printed
//! to stderr after the session finishes.

use anyhow::{Context, Result};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use arex_lex::{Scanner, Token, DEFAULT_MAX_LEXEME_LEN};
use arex_util::Handler;

/// Prompt shown when reading the expression interactively.
pub const PROMPT: &str = "Enter an arithmetic expression (e.g., (sum + 47) / total): ";

/// Configuration for the driver
#[derive(Debug, Clone)]
pub struct Config {
    /// Expression given on the command line (`-e/--expr`)
    pub expr: Option<String>,
    /// Input file; each line is scanned as its own session
    pub input_file: Option<PathBuf>,
    /// Lexeme length limit passed to the scanner
    pub max_lexeme_len: usize,
    /// Verbose progress output on stderr
    pub verbose: bool,
    /// `--help` was requested
    pub help: bool,
    /// `--version` was requested
    pub version: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expr: None,
            input_file: None,
            max_lexeme_len: DEFAULT_MAX_LEXEME_LEN,
            verbose: false,
            help: false,
            version: false,
        }
    }
}

/// Parse command line arguments
pub fn parse_args() -> Result<Config, String> {
    parse_args_from(env::args().skip(1).collect())
}

/// Parse an explicit argument vector (testable core of [`parse_args`])
pub fn parse_args_from(args: Vec<String>) -> Result<Config, String> {
    let mut config = Config::default();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--help" || arg == "-h" {
            config.help = true;
            return Ok(config);
        } else if arg == "--version" || arg == "-V" {
            config.version = true;
            return Ok(config);
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else if arg == "--expr" || arg == "-e" {
            if i + 1 >= args.len() {
                return Err("Missing argument for --expr".to_string());
            }
            i += 1;
            config.expr = Some(args[i].clone());
        } else if arg == "--max-lexeme-len" {
            if i + 1 >= args.len() {
                return Err("Missing argument for --max-lexeme-len".to_string());
            }
            i += 1;
            config.max_lexeme_len = args[i]
                .parse()
                .map_err(|_| format!("Invalid length: {}", args[i]))?;
        } else if arg.starts_with('-') {
            return Err(format!("Unknown option: {}", arg));
        } else if config.input_file.is_none() {
            config.input_file = Some(PathBuf::from(arg));
        } else {
            return Err(format!("Unexpected argument: {}", arg));
        }
        i += 1;
    }

    Ok(config)
}

/// Print help message
pub fn print_help() {
    println!("Arex Expression Scanner v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: arex [OPTIONS] [FILE]");
    println!();
    println!("Scans arithmetic expressions (identifiers, integer literals,");
    println!("+ - * / and parentheses) and prints one line per token.");
    println!();
    println!("Options:");
    println!("  -h, --help             Print this help message");
    println!("  -V, --version          Print version information");
    println!("  -v, --verbose          Enable verbose output");
    println!("  -e, --expr <EXPR>      Scan the given expression");
    println!("  --max-lexeme-len <N>   Lexeme length limit (default: 98)");
    println!();
    println!("With no FILE and no --expr, a single line is read from stdin.");
    println!();
    println!("Examples:");
    println!("  arex -e '(sum + 47) / total'    Scan an expression argument");
    println!("  arex exprs.txt                  Scan each line of a file");
}

/// Print version
pub fn print_version() {
    println!("arex {}", env!("CARGO_PKG_VERSION"));
}

/// One driver run: holds the configuration and the diagnostic handler
/// shared by all scan sessions.
pub struct Session {
    /// Driver configuration.
    pub config: Config,
    /// Collects scanner diagnostics, drained after every session.
    pub diagnostics: Handler,
}

impl Session {
    /// Creates a session from a parsed configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            diagnostics: Handler::new(),
        }
    }

    /// Runs the driver: resolves the input source and scans it.
    pub fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if let Some(expr) = self.config.expr.clone() {
            if self.config.verbose {
                eprintln!("[verbose] Scanning expression argument");
            }
            self.scan_line(&expr, 1, &mut out)?;
            return Ok(());
        }

        if let Some(path) = self.config.input_file.clone() {
            if self.config.verbose {
                eprintln!("[verbose] Scanning file: {}", path.display());
            }
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            for (index, line) in content.lines().enumerate() {
                self.scan_line(line, index as u32 + 1, &mut out)?;
            }
            return Ok(());
        }

        // Interactive mode: prompt, then scan one line.
        print!("{}", PROMPT);
        io::stdout().flush().context("failed to flush prompt")?;
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read expression from stdin")?;
        self.scan_line(&line, 1, &mut out)?;
        Ok(())
    }

    /// Scans one line as a fresh session, reporting each token as it is
    /// recognized. Returns the tokens, terminal token included.
    /// `line_number` is 1-based and flows into every token span.
    ///
    /// The loop stops on either end-of-input kind: the line terminator and
    /// stream exhaustion are distinct kinds but equivalent to the driver.
    pub fn scan_line(&self, line: &str, line_number: u32, out: &mut impl Write) -> Result<Vec<Token>> {
        let mut scanner =
            Scanner::with_lexeme_limit(line, &self.diagnostics, self.config.max_lexeme_len)
                .at_line(line_number);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            writeln!(out, "{}", token).context("failed to write token report")?;
            let done = token.kind.is_end_of_input();
            tokens.push(token);
            if done {
                break;
            }
        }

        for diag in self.diagnostics.take() {
            match diag.code {
                Some(code) => eprintln!("{}[{}]: {}", diag.level, code, diag.message),
                None => eprintln!("{}: {}", diag.level, diag.message),
            }
        }

        Ok(tokens)
    }
}

/// Driver entry point used by the `arex` binary.
pub fn main() -> Result<()> {
    let config = parse_args().map_err(anyhow::Error::msg)?;

    if config.help {
        print_help();
        return Ok(());
    }

    if config.version {
        print_version();
        return Ok(());
    }

    let mut session = Session::new(config);
    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arex_lex::TokenKind;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let config = parse_args_from(vec![]).unwrap();
        assert!(config.expr.is_none());
        assert!(config.input_file.is_none());
        assert_eq!(config.max_lexeme_len, DEFAULT_MAX_LEXEME_LEN);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_args_expr() {
        let config = parse_args_from(args(&["-e", "a + b"])).unwrap();
        assert_eq!(config.expr.as_deref(), Some("a + b"));
    }

    #[test]
    fn test_parse_args_file_and_verbose() {
        let config = parse_args_from(args(&["-v", "exprs.txt"])).unwrap();
        assert!(config.verbose);
        assert_eq!(config.input_file, Some(PathBuf::from("exprs.txt")));
    }

    #[test]
    fn test_parse_args_max_lexeme_len() {
        let config = parse_args_from(args(&["--max-lexeme-len", "10"])).unwrap();
        assert_eq!(config.max_lexeme_len, 10);
    }

    #[test]
    fn test_parse_args_rejects_unknown_option() {
        assert!(parse_args_from(args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn test_parse_args_missing_expr_value() {
        assert!(parse_args_from(args(&["--expr"])).is_err());
    }

    #[test]
    fn test_parse_args_invalid_length() {
        assert!(parse_args_from(args(&["--max-lexeme-len", "many"])).is_err());
    }

    #[test]
    fn test_scan_line_reports_every_token() {
        let session = Session::new(Config::default());
        let mut out = Vec::new();
        let tokens = session
            .scan_line("(sum + 47) / total", 1, &mut out)
            .unwrap();

        assert_eq!(tokens.len(), 8);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);

        let report = String::from_utf8(out).unwrap();
        assert_eq!(report.lines().count(), 8);
        assert!(report.starts_with("Next token is: LEFT_PAREN, Next lexeme is ("));
        assert!(report.ends_with("Next token is: EOF, Next lexeme is EOF\n"));
    }

    #[test]
    fn test_scan_line_stops_at_newline() {
        let session = Session::new(Config::default());
        let mut out = Vec::new();
        let tokens = session.scan_line("a\n", 1, &mut out).unwrap();
        assert_eq!(tokens.last().unwrap().kind, TokenKind::LineEnd);
    }

    #[test]
    fn test_scan_line_spans_carry_the_line_number() {
        let session = Session::new(Config::default());
        let mut out = Vec::new();
        let tokens = session.scan_line("b * 2", 3, &mut out).unwrap();
        assert!(tokens.iter().all(|t| t.span.line == 3));
    }

    #[test]
    fn test_scan_line_drains_diagnostics() {
        let session = Session::new(Config::default());
        let mut out = Vec::new();
        session.scan_line("a = b", 1, &mut out).unwrap();
        // The handler was drained after the session.
        assert!(!session.diagnostics.has_errors());
    }
}
