// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the hello-bounds command-line interface.
//!
//! There are no flags: the first argument is the name, taken as raw OS bytes,
//! whatever it looks like (`-h`, `--version`, `--`, invalid UTF-8). Anything
//! after it is accepted and ignored, and the program always succeeds.

use std::ffi::OsString;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "hello-bounds",
    about = "Greet a name, then copy it into a fixed 64-byte buffer with bounds checking",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Name to greet (defaults to "World")
    #[arg(allow_hyphen_values = true)]
    pub name: Option<OsString>,

    /// Extra arguments, ignored
    #[allow(dead_code)]
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<OsString>,
}

/// clap reserves this as the end-of-options marker.
const END_OF_OPTIONS: &str = "--";

impl Cli {
    /// Parse a full argument list, program name first.
    ///
    /// Never fails: there is no flag to misuse and extra arguments are
    /// swallowed by `rest`.
    pub fn from_args_os<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut cli = Self::parse_from(args.iter().cloned());

        // clap consumes a leading `--`; as the first argument it is the name
        if args.get(1).is_some_and(|first| first == END_OF_OPTIONS) {
            cli.name = Some(OsString::from(END_OF_OPTIONS));
        }

        cli
    }

    /// The name argument as bytes, if one was given.
    pub fn name_bytes(&self) -> Option<&[u8]> {
        self.name.as_deref().map(|name| name.as_encoded_bytes())
    }
}
