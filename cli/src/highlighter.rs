use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::{StyledText, ValidationResult, Validator};

use crate::lexer::{Token, calculate_depth};

#[derive(Debug)]
struct PaletteItem<'a> {
    name: &'a str,
    fg: Color,
}

const PALETTE: &[PaletteItem] = &[
    PaletteItem { name: "", fg: Color::White },
    PaletteItem { name: "operator", fg: Color::White },
    PaletteItem { name: "number", fg: Color::Cyan },
    PaletteItem { name: "function", fg: Color::Blue },
    PaletteItem { name: "variable", fg: Color::Red },
    PaletteItem { name: "punctuation", fg: Color::White },
    PaletteItem { name: "error", fg: Color::LightRed },
];

fn color(name: &str) -> Color {
    PALETTE
        .iter()
        .find(|item| item.name == name)
        .unwrap_or(&PALETTE[0])
        .fg
}

/// Colours an input line by token kind. A name directly followed by `(` is a
/// function call, any other name a variable.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let tokens: Vec<_> = Token::lexer(line).spanned().collect();
        let mut curr_end = 0;

        for (i, (token, span)) in tokens.iter().enumerate() {
            if span.start > curr_end {
                output.push((Style::new(), line[curr_end..span.start].to_string()));
            }
            let name = match token {
                Ok(Token::Number) => "number",
                Ok(Token::Operator) => "operator",
                Ok(Token::LParen | Token::RParen | Token::Comma) => "punctuation",
                Ok(Token::Ident) => match tokens.get(i + 1) {
                    Some((Ok(Token::LParen), _)) => "function",
                    _ => "variable",
                },
                Err(_) => "error",
            };
            output.push((Style::new().fg(color(name)), line[span.clone()].to_string()));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new(), line[curr_end..].to_string()));
        }
        output
    }
}

/// Keeps reading lines while parentheses are open.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}
