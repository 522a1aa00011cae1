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

/// Smallest capacity a word buffer grows to.
pub const W_CHUNK: usize = 100;

/// The word currently being assembled.
///
/// Growth is fallible: running out of memory, or past `max_len`, is
/// reported as [`ErrorKind::NoSpace`] and leaves the buffer unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBuffer<U> {
    units: Vec<U>,
    max_len: Option<usize>,
}

impl<U: CodeUnit> WordBuffer<U> {
    pub fn new(max_len: Option<usize>) -> Self {
        Self {
            units: Vec::new(),
            max_len,
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.units.capacity()
    }

    pub fn as_slice(&self) -> &[U] {
        &self.units
    }

    pub fn into_vec(self) -> Vec<U> {
        self.units
    }

    fn reserve_for(&mut self, additional: usize) -> Result<(), ErrorKind> {
        let required = self
            .units
            .len()
            .checked_add(additional)
            .ok_or(ErrorKind::NoSpace)?;
        if let Some(max_len) = self.max_len {
            if required > max_len {
                return Err(ErrorKind::NoSpace);
            }
        }
        if required <= self.units.capacity() {
            return Ok(());
        }

        // capacity at least doubles
        let mut target = required.saturating_mul(2).max(W_CHUNK);
        if let Some(max_len) = self.max_len {
            target = target.min(max_len);
        }
        self.units
            .try_reserve_exact(target - self.units.len())
            .map_err(|_| ErrorKind::NoSpace)
    }

    pub fn push(&mut self, unit: U) -> Result<(), ErrorKind> {
        self.reserve_for(1)?;
        self.units.push(unit);
        Ok(())
    }

    pub fn extend_from_slice(&mut self, units: &[U]) -> Result<(), ErrorKind> {
        self.reserve_for(units.len())?;
        self.units.extend_from_slice(units);
        Ok(())
    }
}
