use crate::frontend::token::{Token, TokenTag};
use crate::utils::config::lexer::{CLOSE_PAREN, NUMBER_PATTERN, OPEN_PAREN, VARIABLE_PATTERN};
use crate::utils::errors::{LispError, LispResult};
use crate::LineNumber;
use regex::Regex;
use std::{iter::Peekable, str::Chars};

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    state: &'a mut LineNumber,
    number_shape: Regex,
    variable_shape: Regex,
}

impl<'a> Lexer<'a> {
    pub fn new(file_content: &'a str, state: &'a mut LineNumber) -> LispResult<Self> {
        Ok(Self {
            chars: file_content.chars().peekable(),
            state,
            number_shape: Regex::new(NUMBER_PATTERN)?,
            variable_shape: Regex::new(VARIABLE_PATTERN)?,
        })
    }

    pub fn scan(mut self) -> LispResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                None => break,
                Some(&OPEN_PAREN) => {
                    self.chars.next();
                    tokens.push(Token::symbol(TokenTag::Lp));
                }
                Some(&CLOSE_PAREN) => {
                    self.chars.next();
                    tokens.push(Token::symbol(TokenTag::Rp));
                }
                Some(_) => {
                    let word = self.scan_word();
                    tokens.push(self.classify(word)?);
                }
            }
        }
        if tokens.is_empty() {
            return Err(LispError::lexical("Empty program", self.state.line));
        }
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            if ch == '\n' {
                self.state.line += 1;
            }
            self.chars.next();
        }
    }

    // A word ends at whitespace or at either parenthesis.
    fn scan_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() || ch == OPEN_PAREN || ch == CLOSE_PAREN {
                break;
            }
            word.push(ch);
            self.chars.next();
        }
        word
    }

    fn classify(&self, word: String) -> LispResult<Token> {
        if let Some(tag) = TokenTag::keyword(&word) {
            return Ok(Token::new(tag, word));
        }
        let starts_number = word.starts_with('-') || word.starts_with(|c: char| c.is_ascii_digit());
        if starts_number {
            return self.scan_number(word);
        }
        if self.variable_shape.is_match(&word) {
            Ok(Token::variable(word))
        } else {
            Err(LispError::lexical(format!("Invalid variable name: {}", word), self.state.line))
        }
    }

    fn scan_number(&self, word: String) -> LispResult<Token> {
        if !self.number_shape.is_match(&word) || word.parse::<i64>().is_err() {
            return Err(LispError::lexical(format!("Invalid number: {}", word), self.state.line));
        }
        Ok(Token::new(TokenTag::Number, word))
    }
}

// Convenience function mirroring the parser entry point
pub fn scan(state: &mut LineNumber, file_content: &str) -> LispResult<Vec<Token>> {
    let lexer = Lexer::new(file_content, state)?;
    lexer.scan()
}
