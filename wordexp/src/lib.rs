//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Shell-style word splitting in the manner of POSIX `wordexp()`.
//!
//! Input is split into words at unquoted spaces and tabs, after removing
//! quotes and backslash escapes. Parameter expansion, command substitution,
//! tilde expansion, arithmetic expansion and pathname expansion are not
//! performed: `$`, `` ` ``, `~` and glob characters are ordinary text.

pub mod buffer;
pub mod error;
mod expansion;
pub mod flags;
pub mod list;
pub mod quote;
mod scan;
pub mod splitter;
pub mod unit;

pub use error::{Error, ErrorKind, Result};
pub use expansion::Wordexp;
pub use flags::ParseFlags;
pub use list::WordList;
pub use quote::{join_quoted, quote, quote_str};
pub use splitter::{Limits, Splitter};
pub use unit::CodeUnit;

/// Split `input` into `list` according to `flags`. See [`Splitter::split`].
pub fn split<U: CodeUnit>(input: &[U], flags: ParseFlags, list: &mut WordList<U>) -> Result<()> {
    Splitter::new(flags).split(input, list)
}

/// Split a string with default flags, returning the words.
pub fn split_str(input: &str) -> Result<Vec<String>> {
    let words = Wordexp::<char>::new(&char::encode(input)).into_result()?;
    Ok(words.to_strings())
}
