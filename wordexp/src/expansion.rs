//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::error::{Error, Result};
use crate::list::WordList;
use crate::splitter::Splitter;
use crate::unit::CodeUnit;

/// The outcome of expanding one input with default flags.
///
/// Holds the words on success and the error otherwise; iterating a failed
/// expansion yields nothing.
#[derive(Debug, Clone)]
pub struct Wordexp<U> {
    list: WordList<U>,
    error: Option<Error>,
}

impl<U: CodeUnit> Wordexp<U> {
    pub fn new(input: &[U]) -> Self {
        Self::with_splitter(input, &Splitter::default())
    }

    pub fn with_splitter(input: &[U], splitter: &Splitter) -> Self {
        let mut list = WordList::new();
        let error = splitter.split(input, &mut list).err();
        Self { list, error }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn len(&self) -> usize {
        self.list.wordc()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[U]> + '_ {
        self.list.words()
    }

    pub fn into_result(self) -> Result<WordList<U>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.list),
        }
    }
}

impl<'a, U: CodeUnit> IntoIterator for &'a Wordexp<U> {
    type Item = &'a [U];
    type IntoIter = Box<dyn Iterator<Item = &'a [U]> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
