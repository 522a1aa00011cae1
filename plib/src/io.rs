//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fs;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Open `pathname` for reading; no path, or `-`, means standard input.
pub fn input_stream(pathname: Option<&Path>) -> io::Result<Box<dyn Read>> {
    let file: Box<dyn Read> = match pathname {
        Some(path) if path.as_os_str() != "-" => Box::new(fs::File::open(path)?),
        _ => Box::new(io::stdin().lock()),
    };

    Ok(file)
}

pub fn input_reader(pathname: Option<&Path>) -> io::Result<BufReader<Box<dyn Read>>> {
    let file = input_stream(pathname)?;
    Ok(BufReader::new(file))
}
