//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Highlights every match of a regular expression in a file.
//!
//! ```bash
//! brushwork-finder 'fn \w+' src/main.rs
//! ```

use brushwork::{AnsiColor, Background, Brush, BrushResult, RenderConfig, StyledText};
use clap::Parser;
use clap::error::ErrorKind;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error};

/// Highlight every match of a pattern in a file
#[derive(Parser, Debug)]
#[command(name = "brushwork-finder")]
#[command(version, long_about = None)]
struct Args {
    /// Regular expression to look for
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// File to search
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = RenderConfig::detect();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            debug!(%err, "Rejected command line");
            report("invalid given argument, expected: <pattern> <filename>", &config);
            return ExitCode::FAILURE;
        }
    };

    match find(&args.pattern, &args.file) {
        Ok(text) => {
            println!("{}", text.render(&config));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, file = %args.file.display(), "Search failed");
            report(&err.to_string(), &config);
            ExitCode::FAILURE
        }
    }
}

/// Read `file` and mark every match of `pattern` black on yellow.
fn find(pattern: &str, file: &Path) -> BrushResult<StyledText> {
    let marker = Brush::new(AnsiColor::Black, Background::Explicit(AnsiColor::Yellow));
    let pattern = Regex::new(pattern)?;
    let content = std::fs::read_to_string(file)?;
    let text = marker.highlight(&content, &pattern);
    debug!(matches = text.spans().len(), "Highlighted file");
    Ok(text)
}

/// The error line shown to the user.
fn error_line(message: &str) -> StyledText {
    let red = Brush::new(AnsiColor::Red, Background::Default);
    StyledText::join(brushwork::fragments!["[", red.paint(["ERROR"]), "]: ", message])
}

fn report(message: &str, config: &RenderConfig) {
    eprintln!("{}", error_line(message).render(config));
}

#[cfg(test)]
mod tests {
    use super::*;
    use brushwork::BrushError;

    fn fixture(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("brushwork-finder-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_find_highlights_matches() {
        let path = fixture("matches.txt", "trash red banana\ntrash red lolred\n");
        let text = find("red", &path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(text.spans().len(), 3);
        assert_eq!(
            text.render(&RenderConfig::enabled()),
            "trash \x1b[30;43mred\x1b[0m banana\ntrash \x1b[30;43mred\x1b[0m lol\x1b[30;43mred\x1b[0m\n"
        );
    }

    #[test]
    fn test_find_bad_pattern() {
        let err = find("(unclosed", Path::new("unused.txt")).unwrap_err();
        assert!(matches!(err, BrushError::Pattern(_)));
    }

    #[test]
    fn test_find_missing_file() {
        let err = find("red", Path::new("/nonexistent/brushwork/finder.txt")).unwrap_err();
        assert!(matches!(err, BrushError::Io(_)));
    }

    #[test]
    fn test_error_line() {
        assert_eq!(
            error_line("boom").render(&RenderConfig::enabled()),
            "[\x1b[31mERROR\x1b[0m]: boom"
        );
        assert_eq!(error_line("boom").render(&RenderConfig::disabled()), "[ERROR]: boom");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["brushwork-finder", "fn \\w+", "main.rs"]).unwrap();
        assert_eq!(args.pattern, "fn \\w+");
        assert_eq!(args.file, PathBuf::from("main.rs"));
        assert!(Args::try_parse_from(["brushwork-finder", "only-pattern"]).is_err());
    }
}
