// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Notemark CLI entrypoint.
//!
//! Runs the interactive TUI against a notes directory. Notes, settings, and
//! the active theme are persisted as JSON files inside that directory.
//!
//! Use `--demo` to browse a built-in sample notebook without touching disk.

use std::error::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<notes-dir>] [--durable-writes]\n  {program} [--notes <dir>] [--durable-writes]\n  {program} --demo\n\nIf notes-dir/--notes is omitted, the current working directory is used.\n--demo uses a built-in sample notebook, persists nothing, and cannot be\ncombined with notes-dir/--notes.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    notes_dir: Option<String>,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--notes" => {
                if options.notes_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.notes_dir = Some(dir);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.notes_dir.is_some() {
                    return Err(());
                }
                options.notes_dir = Some(arg);
            }
        }
    }

    if options.demo && (options.notes_dir.is_some() || options.durable_writes) {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "notemark".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.demo {
            notemark::tui::run_demo()?;
            return Ok(());
        }

        let dir = options.notes_dir.unwrap_or_else(|| ".".to_owned());
        let store = if options.durable_writes {
            notemark::store::KvStore::new(dir)
                .with_durability(notemark::store::WriteDurability::Durable)
        } else {
            notemark::store::KvStore::new(dir)
        };

        notemark::tui::run_with_store(store)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("notemark: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(["--demo".to_owned()].into_iter()).expect("parse options");
        assert!(options.demo);
        assert!(options.notes_dir.is_none());
        assert!(!options.durable_writes);
    }

    #[test]
    fn parses_notes_dir() {
        let options = parse_options(["--notes".to_owned(), "some/dir".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.notes_dir.as_deref(), Some("some/dir"));
        assert!(!options.demo);
    }

    #[test]
    fn parses_positional_notes_dir() {
        let options = parse_options(["some/dir".to_owned()].into_iter()).expect("parse options");
        assert_eq!(options.notes_dir.as_deref(), Some("some/dir"));
        assert!(!options.demo);
    }

    #[test]
    fn parses_durable_writes() {
        let options = parse_options(["--durable-writes".to_owned()].into_iter())
            .expect("parse options");
        assert!(options.durable_writes);
        assert!(options.notes_dir.is_none());
    }

    #[test]
    fn parses_notes_dir_with_durable_writes() {
        let options = parse_options(
            ["some/dir".to_owned(), "--durable-writes".to_owned()].into_iter(),
        )
        .expect("parse options");
        assert_eq!(options.notes_dir.as_deref(), Some("some/dir"));
        assert!(options.durable_writes);
    }

    #[test]
    fn rejects_demo_with_notes_dir() {
        parse_options(["--demo".to_owned(), "--notes".to_owned(), ".".to_owned()].into_iter())
            .unwrap_err();

        parse_options(["--demo".to_owned(), "some/dir".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_demo_with_durable_writes() {
        parse_options(["--demo".to_owned(), "--durable-writes".to_owned()].into_iter())
            .unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(["--nope".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(["--demo".to_owned(), "--demo".to_owned()].into_iter()).unwrap_err();

        parse_options(
            ["--notes".to_owned(), ".".to_owned(), "--notes".to_owned(), "other".to_owned()]
                .into_iter(),
        )
        .unwrap_err();

        parse_options(
            ["--durable-writes".to_owned(), "--durable-writes".to_owned()].into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_multiple_positional_notes_dirs() {
        parse_options(["one".to_owned(), "two".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_positional_notes_dir_with_notes_flag() {
        parse_options(["--notes".to_owned(), "one".to_owned(), "two".to_owned()].into_iter())
            .unwrap_err();
    }

    #[test]
    fn rejects_missing_notes_value() {
        parse_options(["--notes".to_owned()].into_iter()).unwrap_err();
    }
}
