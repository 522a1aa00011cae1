//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

bitflags::bitflags! {
    /// Options accepted by a word expansion call (the `WRDE_*` flags).
    ///
    /// `NOCMD`, `SHOWERR` and `UNDEF` are accepted and have no effect:
    /// command substitution and variable expansion are not performed, so
    /// there is nothing for them to gate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ParseFlags: u32 {
        /// Reserve `offs` empty leading slots in the result
        const DOOFFS  = 1 << 0;
        /// Extend the result of a previous call
        const APPEND  = 1 << 1;
        /// Fail on command substitution
        const NOCMD   = 1 << 2;
        /// Release the previous result before reusing the list
        const REUSE   = 1 << 3;
        /// Leave stderr of substituted commands alone
        const SHOWERR = 1 << 4;
        /// Fail on references to undefined variables
        const UNDEF   = 1 << 5;
    }
}
