mod highlighter;
mod lexer;

use clap::Parser;
use highlighter::{Highlighter, ParenValidator};
use miette::{IntoDiagnostic, Result};
use reckon::{Calculator, CalculatorOptions, Mode, Variables, decimal, render_error, stdlib};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, EditCommand, Emacs,
    FileBackedHistory, IdeMenu, KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;

const HISTORY_FILE: &str = ".reckon_history";
const HISTORY_SIZE: usize = 1000;

/// Reckon - evaluate arithmetic, bitwise and logical expressions
#[derive(Parser, Debug)]
#[command(name = "reckon")]
#[command(about = "Evaluate arithmetic expressions", long_about = None)]
struct Args {
    /// Evaluate in signed 32-bit integer mode
    #[arg(long, conflicts_with = "unsigned")]
    int: bool,

    /// Evaluate in unsigned 32-bit integer mode
    #[arg(long)]
    unsigned: bool,

    /// Significant digits kept for intermediate results (0 to 32)
    #[arg(long, default_value_t = 16)]
    precision: i32,

    /// Decimals used when substituting variable and function values
    #[arg(long, default_value_t = 8)]
    substitution_digits: usize,

    /// Round the result of every parenthesized group to a stable decimal
    #[arg(long)]
    stabilize: bool,

    /// Print every reduction step
    #[arg(long)]
    debug: bool,

    /// Define a variable (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_variable)]
    vars: Vec<(String, f64)>,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.int {
            Mode::Signed
        } else if self.unsigned {
            Mode::Unsigned
        } else {
            Mode::Float
        }
    }

    fn calculator(&self) -> Calculator {
        let mut calculator = Calculator::with_options(CalculatorOptions {
            debug: self.debug,
            substitution_digits: self.substitution_digits,
            stabilize_results: self.stabilize,
            ..CalculatorOptions::default()
        });
        calculator.set_precision(self.precision);

        if self.debug {
            calculator.set_tracer(Some(Box::new(|line: &str| println!("{}", line))));
        }
        if !self.vars.is_empty() {
            let variables: Variables = self.vars.iter().cloned().collect();
            calculator.set_variable_resolver(Some(Box::new(variables)));
        }
        calculator
    }
}

#[derive(Debug, thiserror::Error)]
enum VariableError {
    #[error("expected NAME=VALUE, got `{0}`")]
    MissingEquals(String),
    #[error("invalid variable name `{0}`")]
    InvalidName(String),
    #[error("invalid value for `{name}`: {source}")]
    InvalidValue {
        name: String,
        source: std::num::ParseFloatError,
    },
}

fn parse_variable(arg: &str) -> std::result::Result<(String, f64), VariableError> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| VariableError::MissingEquals(arg.to_string()))?;
    let name = name.trim();

    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(VariableError::InvalidName(name.to_string()));
    }

    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|source| VariableError::InvalidValue {
            name: name.to_string(),
            source,
        })?;
    Ok((name.to_string(), value))
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn setup_reedline(args: &Args) -> Result<(Reedline, DefaultPrompt)> {
    // Built-in functions and the variables given on the command line.
    let words: Vec<String> = stdlib::NATIVE_FUNCTIONS
        .iter()
        .map(|function| function.name.to_string())
        .chain(args.vars.iter().map(|(name, _)| name.clone()))
        .collect();

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&['_']);
        completions.insert(words);
        completions
    });

    // Use the interactive menu to select options from the completer
    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_correct_cursor_pos(false);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_validator(Box::new(ParenValidator))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(Box::new(ide_menu)))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    if let Some(home) = dirs::home_dir() {
        let history = FileBackedHistory::with_file(HISTORY_SIZE, home.join(HISTORY_FILE))
            .into_diagnostic()?;
        line_editor = line_editor.with_history(Box::new(history));
    }

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("reckon".to_string()),
        DefaultPromptSegment::Empty,
    );

    Ok((line_editor, prompt))
}

/// Evaluate one line and print the result or the error. Returns whether the
/// evaluation succeeded.
fn interpret_input(calculator: &Calculator, mode: Mode, input: &str) -> bool {
    if input.trim().is_empty() {
        return true;
    }

    let result = match mode {
        Mode::Float => calculator.calculate(input).map(|value| {
            decimal::format_decimal(value, calculator.precision())
                .unwrap_or_else(|| value.to_string())
        }),
        Mode::Signed => calculator.calculate_int(input).map(|value| value.to_string()),
        Mode::Unsigned => calculator.calculate_uint(input).map(|value| value.to_string()),
    };

    match result {
        Ok(text) => {
            println!("{}", text);
            true
        }
        Err(e) => {
            tracing::debug!(input, code = ?e.code(), "Evaluation failed");
            render_error(input, &e);
            false
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let calculator = args.calculator();
    let mode = args.mode();

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        if !interpret_input(&calculator, mode, expr) {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline(&args)?;

        println!("Reckon REPL - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    interpret_input(&calculator, mode, &buffer);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode: one expression per line
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        let mut failed = false;
        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            failed |= !interpret_input(&calculator, mode, &line);
        }
        if failed {
            std::process::exit(1);
        }
    }

    Ok(())
}
