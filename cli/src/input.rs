use std::io::{BufRead, Write};
use std::num::ParseIntError;

use thiserror::Error;

use crate::Mode;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("expected two comma separated numbers, e.g. 1,2")]
    MissingComma,
    #[error("invalid number: {0}")]
    InvalidNumber(#[from] ParseIntError),
    #[error("invalid choice {0:?}, expected 1 or 2")]
    InvalidChoice(String),
    #[error("input closed")]
    Closed,
}

/// Parses a player move written as `x,y`.
pub fn parse_coords(line: &str) -> Result<(i64, i64), InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (x, y) = line.split_once(',').ok_or(InputError::MissingComma)?;
    Ok((x.parse()?, y.parse()?))
}

pub fn parse_mode_choice(line: &str) -> Result<Mode, InputError> {
    match line.trim() {
        "1" => Ok(Mode::Auto),
        "2" => Ok(Mode::Manual),
        other => Err(InputError::InvalidChoice(other.to_owned())),
    }
}

/// Writes `prompt` and reads one line, `None` on end of input.
pub fn prompt_line(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> std::io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

pub fn prompt_mode(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<Mode> {
    let line = prompt_line(input, output, "Enter your option: \n1. Auto Play\n2. Manual\n Choice: ")?
        .ok_or(InputError::Closed)?;
    Ok(parse_mode_choice(&line)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_comma_separated_pair() {
        assert_eq!(parse_coords("1,2\n"), Ok((1, 2)));
        assert_eq!(parse_coords("0,9\r\n"), Ok((0, 9)));
        assert_eq!(parse_coords("-1,3"), Ok((-1, 3)));
    }

    #[test]
    fn rejects_malformed_moves() {
        assert_eq!(parse_coords("12"), Err(InputError::MissingComma));
        assert!(matches!(parse_coords("a,2"), Err(InputError::InvalidNumber(_))));
        assert!(matches!(parse_coords("1,2,3"), Err(InputError::InvalidNumber(_))));
        assert!(matches!(parse_coords("1, 2"), Err(InputError::InvalidNumber(_))));
    }

    #[test]
    fn mode_prompt_accepts_menu_numbers() {
        let mut output = Vec::new();
        let mode = prompt_mode(&mut Cursor::new("2\n"), &mut output).unwrap();

        assert_eq!(mode, Mode::Manual);
        assert!(String::from_utf8(output).unwrap().contains("1. Auto Play"));
        assert_eq!(parse_mode_choice(" 1 \n"), Ok(Mode::Auto));
    }

    #[test]
    fn mode_prompt_rejects_other_answers() {
        let err = prompt_mode(&mut Cursor::new("3\n"), &mut Vec::new()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::InvalidChoice("3".to_owned()))
        );

        let err = prompt_mode(&mut Cursor::new(""), &mut Vec::new()).unwrap_err();
        assert_eq!(err.downcast_ref::<InputError>(), Some(&InputError::Closed));
    }
}
