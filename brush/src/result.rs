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

//! Error types for the brushwork crate.
//!
//! Composition and rendering are total, so the only failures surfaced here come
//! from collaborators: pattern compilation, hex color literals and output sinks.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`BrushError`].
pub type BrushResult<T> = Result<T, BrushError>;

/// Errors that can occur when building or writing styled text.
#[derive(Debug, Error)]
pub enum BrushError {
    /// I/O error from an output sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Formatter error from a `fmt::Write` sink
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    /// The highlight pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Hex color literal does not have 3 or 6 digits
    #[error(
        "Cannot parse {input} color: invalid hex length, must be 3 or 6 digits long (excluding optional prefix '#')"
    )]
    InvalidHexLength {
        /// The literal as given by the caller
        input: String,
    },

    /// Hex color literal contains a character that is not a hex digit
    #[error("Cannot parse {input} color: invalid hex digit {token:?}")]
    InvalidHexDigit {
        /// The literal as given by the caller
        input: String,
        /// The offending character
        token: String,
    },
}

impl BrushError {
    /// Check if the error came from parsing a hex color literal
    pub fn is_color_error(&self) -> bool {
        matches!(
            self,
            BrushError::InvalidHexLength { .. } | BrushError::InvalidHexDigit { .. }
        )
    }

    /// Check if the error came from writing output
    pub fn is_output_error(&self) -> bool {
        matches!(self, BrushError::Io(_) | BrushError::Format(_))
    }
}
