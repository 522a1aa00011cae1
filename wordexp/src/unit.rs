//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Code units the splitter can operate on.
//!
//! The splitter only ever compares units against a handful of ASCII
//! characters, so any fixed-width encoding whose ASCII range maps to the
//! same values works: bytes (narrow strings), UTF-16 and UTF-32 units
//! (wide strings) and `char`.

use std::fmt::Debug;

pub trait CodeUnit: Copy + Eq + Debug {
    /// The terminator; scanning stops at the first one.
    const NUL: Self;

    fn from_ascii(byte: u8) -> Self;

    fn is(self, byte: u8) -> bool {
        self == Self::from_ascii(byte)
    }

    /// Encode a string into units of this width.
    fn encode(s: &str) -> Vec<Self>;

    /// Decode units back into a string, replacing invalid sequences.
    fn decode_lossy(units: &[Self]) -> String;
}

impl CodeUnit for u8 {
    const NUL: Self = 0;

    fn from_ascii(byte: u8) -> Self {
        byte
    }

    fn encode(s: &str) -> Vec<Self> {
        s.as_bytes().to_vec()
    }

    fn decode_lossy(units: &[Self]) -> String {
        String::from_utf8_lossy(units).into_owned()
    }
}

impl CodeUnit for u16 {
    const NUL: Self = 0;

    fn from_ascii(byte: u8) -> Self {
        u16::from(byte)
    }

    fn encode(s: &str) -> Vec<Self> {
        s.encode_utf16().collect()
    }

    fn decode_lossy(units: &[Self]) -> String {
        String::from_utf16_lossy(units)
    }
}

impl CodeUnit for u32 {
    const NUL: Self = 0;

    fn from_ascii(byte: u8) -> Self {
        u32::from(byte)
    }

    fn encode(s: &str) -> Vec<Self> {
        s.chars().map(u32::from).collect()
    }

    fn decode_lossy(units: &[Self]) -> String {
        units
            .iter()
            .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl CodeUnit for char {
    const NUL: Self = '\0';

    fn from_ascii(byte: u8) -> Self {
        char::from(byte)
    }

    fn encode(s: &str) -> Vec<Self> {
        s.chars().collect()
    }

    fn decode_lossy(units: &[Self]) -> String {
        units.iter().collect()
    }
}

/// The part of `input` before the first terminator.
pub fn terminated<U: CodeUnit>(input: &[U]) -> &[U] {
    match input.iter().position(|&u| u == U::NUL) {
        Some(end) => &input[..end],
        None => input,
    }
}
