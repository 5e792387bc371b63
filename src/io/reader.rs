//! Whitespace-separated numeric input.
//!
//! [`parse_vector_line`] reads a single line of numbers (the objective prompt), while
//! [`TokenReader`] pulls numbers one at a time across line breaks (counts, matrix cells,
//! right-hand sides). Raw lines can still be read for optional answers such as the tolerance.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::LpError;

fn parse_token<T>(token: &str) -> Result<T, LpError>
where
    T: FromStr,
    T::Err: Display,
{
    token.parse().map_err(|e: T::Err| LpError::Parse {
        token: token.to_string(),
        reason: e.to_string(),
    })
}

/// Every whitespace-separated number on `line`.
pub fn parse_vector_line<T>(line: &str) -> Result<Vec<T>, LpError>
where
    T: FromStr,
    T::Err: Display,
{
    line.split_whitespace().map(parse_token).collect()
}

/// Token stream over buffered input.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        TokenReader { inner, pending: VecDeque::new() }
    }

    fn next_token(&mut self, what: &'static str) -> Result<String, LpError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                return Err(LpError::UnexpectedEof(what));
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next number; `what` names it in the end-of-input error.
    pub fn next_value<T>(&mut self, what: &'static str) -> Result<T, LpError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self.next_token(what)?;
        parse_token(&token)
    }

    /// Next non-negative integer.
    pub fn next_count(&mut self, what: &'static str) -> Result<usize, LpError> {
        self.next_value(what)
    }

    /// Next `n` numbers.
    pub fn read_vector<T>(&mut self, n: usize, what: &'static str) -> Result<Vec<T>, LpError>
    where
        T: FromStr,
        T::Err: Display,
    {
        (0..n).map(|_| self.next_value(what)).collect()
    }

    /// Rest of the current line if tokens remain on it, otherwise the next full line.
    ///
    /// Returns an empty string at end of input so optional answers fall back to defaults.
    pub fn read_line(&mut self) -> Result<String, LpError> {
        if !self.pending.is_empty() {
            let rest: Vec<String> = self.pending.drain(..).collect();
            return Ok(rest.join(" "));
        }
        let mut line = String::new();
        self.inner.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
