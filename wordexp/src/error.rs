//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Error kinds reported by word expansion.
//!
//! The numeric codes match the `WRDE_*` values of `<wordexp.h>` so callers
//! that need a C-compatible status can use [`ErrorKind::code`].

/// Why a word expansion failed.
///
/// `BadChar`, `BadVal` and `CmdSub` belong to expansions this crate does not
/// perform (metacharacter validation, variable expansion with `UNDEF`,
/// command substitution) and are never produced by the splitter today.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Ran out of memory, or a configured size limit was exceeded
    #[error("out of memory")]
    NoSpace,
    /// A shell metacharacter appeared in an invalid position
    #[error("invalid character")]
    BadChar,
    /// Reference to an undefined variable while `UNDEF` was set
    #[error("undefined variable reference")]
    BadVal,
    /// Command substitution requested while disabled
    #[error("command substitution is disabled")]
    CmdSub,
    /// Malformed input: unterminated quote or dangling backslash
    #[error("bad syntax")]
    Syntax,
}

impl ErrorKind {
    /// The `WRDE_*` status code for this kind.
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::NoSpace => 1,
            ErrorKind::BadChar => 2,
            ErrorKind::BadVal => 3,
            ErrorKind::CmdSub => 4,
            ErrorKind::Syntax => 5,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(ErrorKind::NoSpace),
            2 => Some(ErrorKind::BadChar),
            3 => Some(ErrorKind::BadVal),
            4 => Some(ErrorKind::CmdSub),
            5 => Some(ErrorKind::Syntax),
            _ => None,
        }
    }
}

fn format_context(context: &Option<&'static str>) -> String {
    match context {
        Some(context) => format!(": {context}"),
        None => String::new(),
    }
}

fn format_offset(offset: &Option<usize>) -> String {
    match offset {
        Some(offset) => format!(" at offset {offset}"),
        None => String::new(),
    }
}

/// A failed expansion: the kind, an optional detail and the code unit
/// offset of the construct that failed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{}{}{}", .kind, format_context(.context), format_offset(.offset))]
pub struct Error {
    kind: ErrorKind,
    context: Option<&'static str>,
    offset: Option<usize>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
            offset: None,
        }
    }

    pub(crate) fn syntax(context: &'static str, offset: usize) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            context: Some(context),
            offset: Some(offset),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn context(&self) -> Option<&'static str> {
        self.context
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Attach `offset` unless a more precise one was already recorded.
    pub(crate) fn or_offset(mut self, offset: usize) -> Self {
        self.offset.get_or_insert(offset);
        self
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
