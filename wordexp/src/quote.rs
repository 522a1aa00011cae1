//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Quote words so that splitting the result gives them back unchanged.

use crate::unit::CodeUnit;

/// Append `word` to `out` as one shell token.
///
/// Runs of units other than `'` are single-quoted and each `'` is written
/// as `\'` between them. An empty quoted run splits off an empty word of its
/// own, so `''` is only written for the empty word itself.
pub fn quote_into<U: CodeUnit>(word: &[U], out: &mut Vec<U>) {
    let quote = U::from_ascii(b'\'');
    let backslash = U::from_ascii(b'\\');

    if word.is_empty() {
        out.extend_from_slice(&[quote, quote]);
        return;
    }

    out.reserve(word.len() + 2);
    for (i, run) in word.split(|&unit| unit == quote).enumerate() {
        if i > 0 {
            out.extend_from_slice(&[backslash, quote]);
        }
        if !run.is_empty() {
            out.push(quote);
            out.extend_from_slice(run);
            out.push(quote);
        }
    }
}

pub fn quote<U: CodeUnit>(word: &[U]) -> Vec<U> {
    let mut out = Vec::new();
    quote_into(word, &mut out);
    out
}

/// Quote every word and join them with single spaces.
pub fn join_quoted<U, W, I>(words: I) -> Vec<U>
where
    U: CodeUnit,
    W: AsRef<[U]>,
    I: IntoIterator<Item = W>,
{
    let space = U::from_ascii(b' ');
    let mut out = Vec::new();
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            out.push(space);
        }
        quote_into(word.as_ref(), &mut out);
    }
    out
}

pub fn quote_str(word: &str) -> String {
    char::decode_lossy(&quote(&char::encode(word)))
}
