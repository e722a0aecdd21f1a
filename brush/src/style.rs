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

use crate::consts::{CSI, RESET, SGR_FINAL, SGR_SEPARATOR};
use crate::{Background, BrushResult, ColorModel};
use bytes::BufMut;

/// The SGR parameters applied to one styled span.
///
/// A `Style` is built once from a [`ColorModel`] value and never changes. It
/// stores the foreground parameters and, when an explicit background was
/// selected, the background parameters. Wrapping content produces
///
/// ```text
/// ESC [ <foreground>[;<background>] m <content> ESC [ 0 m
/// ```
///
/// # Examples
///
/// ```rust
/// use brushwork::{AnsiColor, Background, Style};
///
/// let style = Style::new(&AnsiColor::Black, &Background::Explicit(AnsiColor::Yellow));
/// assert_eq!(style.sgr_params(), "30;43");
///
/// let mut output = String::new();
/// style.wrap(&mut output, "marked").unwrap();
/// assert_eq!(output, "\x1b[30;43mmarked\x1b[0m");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Style {
    foreground: String,
    background: Option<String>,
}

impl Style {
    /// Build a style from a foreground color and a background selection.
    pub fn new<C: ColorModel>(foreground: &C, background: &Background<C>) -> Style {
        Style {
            foreground: foreground.foreground_code(),
            background: background.as_explicit().map(ColorModel::background_code),
        }
    }

    /// Build a style from raw parameter strings.
    ///
    /// The parameters are not validated.
    pub fn from_params(foreground: impl Into<String>, background: Option<String>) -> Style {
        Style {
            foreground: foreground.into(),
            background,
        }
    }

    /// Foreground SGR parameters
    pub fn foreground_params(&self) -> &str {
        &self.foreground
    }

    /// Background SGR parameters, `None` for the terminal default
    pub fn background_params(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Full parameter list, foreground first.
    pub fn sgr_params(&self) -> String {
        match &self.background {
            Some(background) => format!("{}{SGR_SEPARATOR}{background}", self.foreground),
            None => self.foreground.clone(),
        }
    }

    /// Length in bytes of the opening escape sequence.
    pub fn open_len(&self) -> usize {
        let background = self
            .background
            .as_ref()
            .map_or(0, |background| SGR_SEPARATOR.len() + background.len());
        CSI.len() + self.foreground.len() + background + SGR_FINAL.len()
    }

    /// Length in bytes of `content_len` bytes of content once wrapped.
    pub fn wrapped_len(&self, content_len: usize) -> usize {
        self.open_len() + content_len + RESET.len()
    }

    /// Writes the opening escape sequence.
    pub fn write_open<W: std::fmt::Write>(&self, writer: &mut W) -> std::fmt::Result {
        writer.write_str(CSI)?;
        writer.write_str(&self.foreground)?;
        if let Some(background) = &self.background {
            writer.write_str(SGR_SEPARATOR)?;
            writer.write_str(background)?;
        }
        writer.write_str(SGR_FINAL)
    }

    /// Writes the reset escape sequence (`\x1b[0m`).
    pub fn write_reset<W: std::fmt::Write>(writer: &mut W) -> std::fmt::Result {
        writer.write_str(RESET)
    }

    /// Writes `content` wrapped in this style's escape sequences.
    pub fn wrap<W: std::fmt::Write>(&self, writer: &mut W, content: &str) -> std::fmt::Result {
        self.write_open(writer)?;
        writer.write_str(content)?;
        Self::write_reset(writer)
    }

    /// Appends `content` wrapped in this style's escape sequences to a string.
    pub fn wrap_into(&self, output: &mut String, content: &str) {
        output.reserve(self.wrapped_len(content.len()));
        output.push_str(CSI);
        output.push_str(&self.foreground);
        if let Some(background) = &self.background {
            output.push_str(SGR_SEPARATOR);
            output.push_str(background);
        }
        output.push_str(SGR_FINAL);
        output.push_str(content);
        output.push_str(RESET);
    }

    /// Writes `content` wrapped in this style's escape sequences to an I/O sink,
    /// returning the number of bytes written.
    pub fn write<W: std::io::Write>(&self, writer: &mut W, content: &str) -> std::io::Result<usize> {
        write!(writer, "{CSI}{}{SGR_FINAL}{content}{RESET}", self.sgr_params())?;
        Ok(self.wrapped_len(content.len()))
    }

    /// Encodes `content` wrapped in this style's escape sequences into a buffer.
    pub fn encode<T: BufMut>(&self, dst: &mut T, content: &str) -> BrushResult<usize> {
        Ok(self.write(&mut dst.writer(), content)?)
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_open(f)
    }
}
