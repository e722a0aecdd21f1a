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

//! Styled terminal text composition.
//!
//! Text is decorated with ANSI SGR color codes by attaching [`StyleSpan`]s to
//! ranges of a [`StyledText`] buffer. Independently styled pieces can then be
//! concatenated ([`StyledText::append`]), highlighted by pattern
//! ([`SpanBuilder::highlight`], [`SpanBuilder::highlight_func`]) or nested
//! under an ambient style ([`SpanBuilder::embed`]) without styles bleeding
//! across boundaries. A [`Renderer`] turns the result into a string, honoring
//! a [`RenderConfig`].
//!
//! ```rust
//! use brushwork::{fragments, AnsiColor, Background, Brush, RenderConfig};
//! use regex::Regex;
//!
//! let yellow = Brush::new(AnsiColor::Yellow, Background::Default);
//! let green = Brush::new(AnsiColor::Green, Background::Default);
//! let blue = Brush::new(AnsiColor::Blue, Background::Default);
//!
//! let text = blue.embed(fragments![
//!     yellow.highlight("Sun is yellow", &Regex::new("Sun|yellow").unwrap()),
//!     ", ",
//!     green.paint(["grass"]),
//!     " is green",
//! ]);
//! assert_eq!(text.render(&RenderConfig::disabled()), "Sun is yellow, grass is green");
//! ```

mod brush;
mod builder;
mod codec;
mod color;
mod config;
mod consts;
mod fragment;
mod painted;
mod pattern;
mod render;
mod result;
mod span;
mod style;
mod styled;

pub use self::brush::Brush;
pub use self::builder::SpanBuilder;
pub use self::codec::BrushCodec;
pub use self::color::{AnsiColor, Background, ColorModel, ExtendedColor, Intensity, TrueColor};
pub use self::config::RenderConfig;
pub use self::fragment::Fragment;
pub use self::painted::{Painted, paint, paint_fmt, paintln};
pub use self::pattern::Pattern;
pub use self::render::Renderer;
pub use self::result::{BrushError, BrushResult};
pub use self::span::StyleSpan;
pub use self::style::Style;
pub use self::styled::{Piece, Pieces, StyledText};
