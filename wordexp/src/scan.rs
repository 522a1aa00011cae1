//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! The single left-to-right pass that turns input into words.
//!
//! Outside quotes, space and tab end the current word, a backslash takes the
//! next unit literally (or drops an escaped newline) and every other unit is
//! part of the word. Single quotes copy everything up to the closing quote.
//! Double quotes copy everything up to the closing quote, decoding `\$`,
//! ``\` ``, `\"` and `\\`, dropping `\<newline>` and keeping any other
//! backslash pair as is.

use crate::buffer::WordBuffer;
use crate::error::{Error, Result};
use crate::list::WordList;
use crate::splitter::Limits;
use crate::unit::{terminated, CodeUnit};

/// How the driver treats a unit seen outside quotes.
enum UnitClass {
    Backslash,
    DoubleQuote,
    SingleQuote,
    Separator,
    Literal,
}

fn classify<U: CodeUnit>(unit: U) -> UnitClass {
    if unit.is(b'\\') {
        UnitClass::Backslash
    } else if unit.is(b'"') {
        UnitClass::DoubleQuote
    } else if unit.is(b'\'') {
        UnitClass::SingleQuote
    } else if is_separator(unit) {
        UnitClass::Separator
    } else {
        UnitClass::Literal
    }
}

/// Newline belongs to the default field separators but never splits words.
pub(crate) fn is_ifs_whitespace<U: CodeUnit>(unit: U) -> bool {
    unit.is(b' ') || unit.is(b'\t') || unit.is(b'\n')
}

pub(crate) fn is_separator<U: CodeUnit>(unit: U) -> bool {
    is_ifs_whitespace(unit) && !unit.is(b'\n')
}

/// Units a backslash escapes inside double quotes.
fn is_dquote_escapable<U: CodeUnit>(unit: U) -> bool {
    unit.is(b'$') || unit.is(b'`') || unit.is(b'"') || unit.is(b'\\')
}

pub(crate) struct Scanner<'a, U> {
    input: &'a [U],
    pos: usize,
    // None until the word in progress has its first unit
    word: Option<WordBuffer<U>>,
    limits: Limits,
}

impl<'a, U: CodeUnit> Scanner<'a, U> {
    pub(crate) fn new(input: &'a [U], limits: Limits) -> Self {
        Self {
            input: terminated(input),
            pos: 0,
            word: None,
            limits,
        }
    }

    fn next_unit(&mut self) -> Option<U> {
        let unit = self.input.get(self.pos).copied();
        if unit.is_some() {
            self.pos += 1;
        }
        unit
    }

    fn word(&mut self) -> &mut WordBuffer<U> {
        let max_len = self.limits.max_word_len;
        self.word.get_or_insert_with(|| WordBuffer::new(max_len))
    }

    fn add(&mut self, unit: U) -> Result<()> {
        self.word().push(unit)?;
        Ok(())
    }

    fn add_all(&mut self, units: &[U]) -> Result<()> {
        if units.is_empty() {
            return Ok(());
        }
        self.word().extend_from_slice(units)?;
        Ok(())
    }

    fn commit(&mut self, list: &mut WordList<U>) -> Result<()> {
        if let Some(word) = self.word.take() {
            let word = word.into_vec();
            log::trace!("word {}: {:?}", list.wordc(), word);
            list.push_word(word, self.limits.max_words)?;
        }
        Ok(())
    }

    /// A quoted section that closes with no units in the current word
    /// appends an empty word of its own. The current word is left alone.
    fn close_quote(&mut self, list: &mut WordList<U>) -> Result<()> {
        if self.word.as_ref().map_or(true, WordBuffer::is_empty) {
            log::trace!("word {}: empty quote", list.wordc());
            list.push_word(Vec::new(), self.limits.max_words)?;
        }
        Ok(())
    }

    /// Split the remaining input, appending every word to `list`.
    pub(crate) fn run(mut self, list: &mut WordList<U>) -> Result<()> {
        while let Some(unit) = self.next_unit() {
            let start = self.pos - 1;
            let outcome = match classify(unit) {
                UnitClass::Backslash => self.backslash(start),
                UnitClass::DoubleQuote => self
                    .double_quote(start)
                    .and_then(|()| self.close_quote(list)),
                UnitClass::SingleQuote => self
                    .single_quote(start)
                    .and_then(|()| self.close_quote(list)),
                UnitClass::Separator => self.commit(list),
                UnitClass::Literal => self.add(unit),
            };
            outcome.map_err(|err| err.or_offset(start))?;
        }

        let end = self.pos;
        self.commit(list).map_err(|err| err.or_offset(end))
    }

    /// Poised just after an unquoted backslash.
    fn backslash(&mut self, at: usize) -> Result<()> {
        match self.next_unit() {
            None => Err(Error::syntax("trailing backslash", at)),
            Some(unit) if unit.is(b'\n') => Ok(()),
            Some(unit) => self.add(unit),
        }
    }

    /// Poised just after a backslash inside double quotes.
    fn quoted_backslash(&mut self, at: usize) -> Result<()> {
        match self.next_unit() {
            None => Err(Error::syntax("trailing backslash", at)),
            Some(unit) if unit.is(b'\n') => Ok(()),
            Some(unit) if is_dquote_escapable(unit) => self.add(unit),
            Some(unit) => self.add_all(&[U::from_ascii(b'\\'), unit]),
        }
    }

    /// Poised just after an opening single quote at `open`.
    fn single_quote(&mut self, open: usize) -> Result<()> {
        let input = self.input;
        let rest = &input[self.pos..];
        let Some(len) = rest.iter().position(|unit| unit.is(b'\'')) else {
            return Err(Error::syntax("unterminated single quote", open));
        };
        self.add_all(&rest[..len])?;
        self.pos += len + 1;
        Ok(())
    }

    /// Poised just after an opening double quote at `open`.
    fn double_quote(&mut self, open: usize) -> Result<()> {
        loop {
            let at = self.pos;
            match self.next_unit() {
                None => return Err(Error::syntax("unterminated double quote", open)),
                Some(unit) if unit.is(b'"') => return Ok(()),
                Some(unit) if unit.is(b'\\') => self.quoted_backslash(at)?,
                Some(unit) => self.add(unit)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use test_log::test;

    fn scan(input: &str) -> Result<Vec<String>> {
        let mut list = WordList::<char>::new();
        list.allocate(0)?;
        Scanner::new(&char::encode(input), Limits::default()).run(&mut list)?;
        Ok(list.to_strings())
    }

    #[test]
    fn classifies_default_ifs() {
        assert!(is_ifs_whitespace(b'\n'));
        assert!(!is_separator(b'\n'));
        assert!(is_separator(b' '));
        assert!(is_separator('\t'));
        assert!(!is_separator(b'\r'));
    }

    #[test]
    fn single_quote_run_is_copied_whole() {
        assert_eq!(scan(r"x'a \ $ `b'y").unwrap(), vec![r"xa \ $ `by"]);
    }

    #[test]
    fn unterminated_quotes_point_at_the_opening_quote() {
        let err = scan("ab 'cd").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.offset(), Some(3));
        assert_eq!(err.context(), Some("unterminated single quote"));

        let err = scan("\"x").unwrap_err();
        assert_eq!(err.offset(), Some(0));
        assert_eq!(err.context(), Some("unterminated double quote"));
    }

    #[test]
    fn empty_quote_adds_its_own_word() {
        assert_eq!(scan("\"\"abc").unwrap(), vec!["", "abc"]);
        assert_eq!(scan("''x''").unwrap(), vec!["", "x"]);
        assert_eq!(scan("\"\\\n\"").unwrap(), vec![""]);
        assert!(scan("\\\n").unwrap().is_empty());
    }

    #[test]
    fn empty_quote_counts_against_word_limit() {
        let mut list = WordList::<u8>::new();
        list.allocate(0).unwrap();
        let limits = Limits {
            max_word_len: None,
            max_words: Some(1),
        };
        let err = Scanner::new(&b"'' \"\""[..], limits).run(&mut list).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSpace);
        assert_eq!(err.offset(), Some(3));
    }

    #[test]
    fn backslash_at_end_of_double_quote() {
        let err = scan("\"abc\\").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.offset(), Some(4));
        assert_eq!(err.context(), Some("trailing backslash"));
    }

    #[test]
    fn trailing_backslash_offset() {
        let err = scan("a b\\").unwrap_err();
        assert_eq!(err.offset(), Some(3));
        assert_eq!(err.context(), Some("trailing backslash"));
    }

    #[test]
    fn word_limit_reports_offset_of_failing_unit() {
        let mut list = WordList::<u8>::new();
        list.allocate(0).unwrap();
        let limits = Limits {
            max_word_len: Some(2),
            max_words: None,
        };
        let err = Scanner::new(&b"ab abc"[..], limits).run(&mut list).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSpace);
        assert_eq!(err.offset(), Some(5));
        assert_eq!(list.to_strings(), vec!["ab"]);
    }

    #[test]
    fn word_count_limit_applies_to_final_word() {
        let mut list = WordList::<u8>::new();
        list.allocate(0).unwrap();
        let limits = Limits {
            max_word_len: None,
            max_words: Some(1),
        };
        let err = Scanner::new(&b"a b"[..], limits).run(&mut list).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSpace);
        assert_eq!(err.offset(), Some(3));
    }
}
