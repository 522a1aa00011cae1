//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::error::ErrorKind;
use crate::unit::CodeUnit;

/// The result of one or more word expansions.
///
/// While storage is allocated the slot vector is laid out the way
/// `we_wordv` is: `offs` empty reserved slots, `wordc` words, then one
/// empty terminator slot. A list whose storage is released has no slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList<U> {
    slots: Vec<Option<Vec<U>>>,
    wordc: usize,
    offs: usize,
}

impl<U> Default for WordList<U> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            wordc: 0,
            offs: 0,
        }
    }
}

impl<U: CodeUnit> WordList<U> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A released list that reserves `offs` leading slots once expanded
    /// with [`ParseFlags::DOOFFS`](crate::ParseFlags::DOOFFS).
    pub fn with_offs(offs: usize) -> Self {
        Self {
            offs,
            ..Self::default()
        }
    }

    /// Number of words, not counting reserved slots.
    pub fn wordc(&self) -> usize {
        self.wordc
    }

    pub fn len(&self) -> usize {
        self.wordc
    }

    pub fn is_empty(&self) -> bool {
        self.wordc == 0
    }

    pub fn offs(&self) -> usize {
        self.offs
    }

    /// Request `offs` reserved slots for the next non-appending expansion.
    /// Takes effect when storage is next allocated.
    pub fn set_offs(&mut self, offs: usize) {
        self.offs = offs;
    }

    pub fn is_allocated(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Reserved slots, words and terminator, as in `we_wordv`.
    pub fn slots(&self) -> &[Option<Vec<U>>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&[U]> {
        if index >= self.wordc {
            return None;
        }
        self.slots[self.offs + index].as_deref()
    }

    pub fn words(&self) -> impl Iterator<Item = &[U]> + '_ {
        let words: &[Option<Vec<U>>] = if self.is_allocated() {
            &self.slots[self.offs..self.offs + self.wordc]
        } else {
            &[]
        };
        words.iter().flatten().map(Vec::as_slice)
    }

    pub fn into_words(self) -> Vec<Vec<U>> {
        let Self { slots, offs, .. } = self;
        slots.into_iter().skip(offs).flatten().collect()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.words().map(U::decode_lossy).collect()
    }

    /// Release all storage (`wordfree`). Calling it again is harmless.
    pub fn free(&mut self) {
        self.slots = Vec::new();
        self.wordc = 0;
    }

    /// Replace any storage with `offs` reserved slots and a terminator.
    pub(crate) fn allocate(&mut self, offs: usize) -> Result<(), ErrorKind> {
        let len = offs.checked_add(1).ok_or(ErrorKind::NoSpace)?;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| ErrorKind::NoSpace)?;
        slots.resize_with(len, || None);

        self.slots = slots;
        self.wordc = 0;
        self.offs = offs;
        Ok(())
    }

    /// Append a finished word; storage grows one slot at a time.
    pub(crate) fn push_word(
        &mut self,
        word: Vec<U>,
        max_words: Option<usize>,
    ) -> Result<(), ErrorKind> {
        debug_assert!(self.is_allocated());
        if max_words.is_some_and(|max| self.wordc >= max) {
            return Err(ErrorKind::NoSpace);
        }
        self.slots
            .try_reserve_exact(1)
            .map_err(|_| ErrorKind::NoSpace)?;

        let terminator = self.offs + self.wordc;
        self.slots[terminator] = Some(word);
        self.slots.push(None);
        self.wordc += 1;
        Ok(())
    }

    /// Drop every word after the first `wordc`.
    pub(crate) fn truncate(&mut self, wordc: usize) {
        if wordc >= self.wordc {
            return;
        }
        self.slots.truncate(self.offs + wordc);
        self.slots.push(None);
        self.wordc = wordc;
    }
}
