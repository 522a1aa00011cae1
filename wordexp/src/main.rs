//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::ffi::OsString;
use std::io::{self, BufRead, BufWriter, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::io::input_reader;
use plib::PROJECT_NAME;
use wordexp::{join_quoted, ErrorKind, Limits, ParseFlags, Splitter, WordList};

/// wordexp - split strings into words using shell quoting rules
#[derive(Parser)]
#[command(version, about = gettext("wordexp - split strings into words using shell quoting rules"))]
struct Args {
    #[arg(short = 'z', long, help = gettext("Terminate each word, or each quoted line, with a NUL byte instead of a newline"))]
    null: bool,

    #[arg(short, long, conflicts_with = "count", help = gettext("Print the words of each input on one line, quoted for reuse by a shell"))]
    quote: bool,

    #[arg(short, long, conflicts_with = "null", help = gettext("Print only the number of words"))]
    count: bool,

    #[arg(short, long, help = gettext("Collect the words of all inputs and print them once at the end"))]
    append: bool,

    #[arg(short, long, value_name = "N", help = gettext("Reserve N empty slots before the words"))]
    offs: Option<usize>,

    #[arg(long, value_name = "N", help = gettext("Fail when a word is longer than N characters"))]
    max_word_len: Option<usize>,

    #[arg(long, value_name = "N", help = gettext("Fail when the result would hold more than N words"))]
    max_words: Option<usize>,

    #[arg(short, long, conflicts_with = "strings", help = gettext("Read input lines from FILE instead of standard input"))]
    file: Option<PathBuf>,

    #[arg(help = gettext("Strings to split; without any, each line of input is split"))]
    strings: Vec<OsString>,
}

#[derive(thiserror::Error, Debug)]
enum WordexpError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{origin}: {source}")]
    Split {
        origin: String,
        source: wordexp::Error,
    },
}

impl WordexpError {
    fn exit_code(&self) -> i32 {
        match self {
            WordexpError::Io(_) => 1,
            WordexpError::Split { source, .. } => match source.kind() {
                ErrorKind::Syntax | ErrorKind::BadChar | ErrorKind::CmdSub => 2,
                ErrorKind::BadVal => 3,
                ErrorKind::NoSpace => 4,
            },
        }
    }
}

fn print_words(out: &mut dyn Write, list: &WordList<u8>, args: &Args) -> io::Result<()> {
    let terminator = if args.null { b'\0' } else { b'\n' };
    if args.count {
        writeln!(out, "{}", list.wordc())?;
    } else if args.quote {
        out.write_all(&join_quoted(list.words()))?;
        out.write_all(&[terminator])?;
    } else {
        // reserved slots print as empty words
        for slot in list.slots().iter().take(list.offs() + list.wordc()) {
            if let Some(word) = slot {
                out.write_all(word)?;
            }
            out.write_all(&[terminator])?;
        }
    }
    Ok(())
}

struct Expander<'a> {
    args: &'a Args,
    splitter: Splitter,
    list: WordList<u8>,
    calls: usize,
}

impl<'a> Expander<'a> {
    fn new(args: &'a Args) -> Self {
        let mut flags = ParseFlags::empty();
        let mut list = WordList::new();
        if let Some(offs) = args.offs {
            flags |= ParseFlags::DOOFFS;
            list.set_offs(offs);
        }
        let limits = Limits {
            max_word_len: args.max_word_len,
            max_words: args.max_words,
        };

        Self {
            args,
            splitter: Splitter::new(flags).with_limits(limits),
            list,
            calls: 0,
        }
    }

    fn expand(
        &mut self,
        origin: String,
        input: &[u8],
        out: &mut dyn Write,
    ) -> Result<(), WordexpError> {
        let mut flags = self.splitter.flags();
        if self.calls > 0 {
            flags |= if self.args.append {
                ParseFlags::APPEND
            } else {
                ParseFlags::REUSE
            };
        }
        self.calls += 1;

        self.splitter
            .with_flags(flags)
            .split(input, &mut self.list)
            .map_err(|source| WordexpError::Split { origin, source })?;

        if !self.args.append {
            print_words(out, &self.list, self.args)?;
        }
        Ok(())
    }

    fn finish(self, out: &mut dyn Write) -> io::Result<()> {
        if self.args.append {
            print_words(out, &self.list, self.args)?;
        }
        Ok(())
    }
}

fn run(args: &Args, out: &mut dyn Write) -> Result<(), WordexpError> {
    let mut expander = Expander::new(args);

    if args.strings.is_empty() {
        let reader = input_reader(args.file.as_deref())?;
        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            let origin = format!("{} {}", gettext("line"), index + 1);
            expander.expand(origin, &line, out)?;
        }
    } else {
        for (index, string) in args.strings.iter().enumerate() {
            let origin = format!("{} {}", gettext("argument"), index + 1);
            expander.expand(origin, string.as_bytes(), out)?;
        }
    }

    expander.finish(out)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let args = Args::parse();

    let mut out = BufWriter::new(io::stdout().lock());
    let result = run(&args, &mut out);
    out.flush()?;

    let exit_code = match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("wordexp: {}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code)
}
