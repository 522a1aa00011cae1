//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::error::Result;
use crate::flags::ParseFlags;
use crate::list::WordList;
use crate::scan::Scanner;
use crate::unit::CodeUnit;

/// Size caps for a single expansion. Exceeding one fails with
/// [`ErrorKind::NoSpace`](crate::ErrorKind::NoSpace), exactly as running
/// out of memory would.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Longest word, in code units
    pub max_word_len: Option<usize>,
    /// Most words the list may hold, appended ones included
    pub max_words: Option<usize>,
}

/// State needed to undo a failed expansion.
enum Snapshot<U> {
    /// Words were appended to the existing storage.
    Extended { was_allocated: bool, wordc: usize },
    /// The list was swapped for fresh storage; this is what it held.
    Replaced(WordList<U>),
}

impl<U: CodeUnit> Snapshot<U> {
    fn restore(self, list: &mut WordList<U>) {
        match self {
            Snapshot::Extended {
                was_allocated: true,
                wordc,
            } => list.truncate(wordc),
            Snapshot::Extended {
                was_allocated: false,
                ..
            } => list.free(),
            Snapshot::Replaced(previous) => *list = previous,
        }
    }
}

/// Runs word expansions with a fixed set of flags and limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Splitter {
    flags: ParseFlags,
    limits: Limits,
}

impl Splitter {
    pub fn new(flags: ParseFlags) -> Self {
        Self {
            flags,
            limits: Limits::default(),
        }
    }

    pub fn with_flags(mut self, flags: ParseFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn max_word_len(mut self, max: usize) -> Self {
        self.limits.max_word_len = Some(max);
        self
    }

    pub fn max_words(mut self, max: usize) -> Self {
        self.limits.max_words = Some(max);
        self
    }

    pub fn flags(&self) -> ParseFlags {
        self.flags
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Split `input` into words, storing them in `list`.
    ///
    /// Without `APPEND` the list is replaced by the new words (behind
    /// `offs` empty slots when `DOOFFS` is set); with it they are added
    /// after the existing ones. `REUSE` releases the list's storage before
    /// anything else happens.
    ///
    /// The call is atomic: if it fails, for any reason, `list` is left as
    /// it was after the `REUSE` step.
    pub fn split<U: CodeUnit>(&self, input: &[U], list: &mut WordList<U>) -> Result<()> {
        let flags = self.flags;
        log::trace!("splitting {} units, flags {:?}", input.len(), flags);

        if flags.contains(ParseFlags::REUSE) {
            list.free();
        }

        let snapshot = if flags.contains(ParseFlags::APPEND) {
            let snapshot = Snapshot::Extended {
                was_allocated: list.is_allocated(),
                wordc: list.wordc(),
            };
            if !list.is_allocated() {
                list.allocate(list.offs())?;
            }
            snapshot
        } else {
            let offs = if flags.contains(ParseFlags::DOOFFS) {
                list.offs()
            } else {
                0
            };
            let mut fresh = WordList::new();
            fresh.allocate(offs)?;
            Snapshot::Replaced(std::mem::replace(list, fresh))
        };

        let result = Scanner::new(input, self.limits).run(list);
        if let Err(err) = &result {
            log::debug!("word expansion failed: {err}; restoring word list");
            snapshot.restore(list);
        }
        result
    }
}
