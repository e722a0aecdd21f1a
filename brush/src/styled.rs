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

use crate::{Fragment, RenderConfig, Renderer, Style, StyleSpan};
use std::ops::Range;
use tracing::trace;

/// A content buffer plus the ordered list of styled ranges over it.
///
/// `StyledText` is the structure every composition operation works on. Spans
/// are sorted by start offset, never overlap and always lie inside the content.
/// The buffer only grows: content is appended and spans are added after all
/// existing ones, so the ordering holds by construction.
///
/// Bytes not covered by any span are gaps. Gaps render verbatim.
///
/// # Examples
///
/// ```rust
/// use brushwork::{AnsiColor, Background, Brush, RenderConfig, StyledText};
///
/// let yellow = Brush::new(AnsiColor::Yellow, Background::Default);
///
/// let mut text = StyledText::empty();
/// text.append(yellow.paint(["Hello"])).append(" world");
///
/// assert_eq!(text.content(), "Hello world");
/// assert_eq!(text.spans().len(), 1);
/// assert_eq!(
///     text.render(&RenderConfig::enabled()),
///     "\x1b[33mHello\x1b[0m world"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct StyledText {
    content: String,
    spans: Vec<StyleSpan>,
}

impl StyledText {
    /// Creates a new empty `StyledText` with no spans.
    pub fn empty() -> StyledText {
        StyledText {
            content: String::new(),
            spans: Vec::new(),
        }
    }

    /// Creates a `StyledText` holding `content` without any span.
    pub fn plain(content: impl Into<String>) -> StyledText {
        StyledText {
            content: content.into(),
            spans: Vec::new(),
        }
    }

    /// Joins fragments as successive [`append`](StyledText::append) calls would.
    ///
    /// ```rust
    /// use brushwork::{fragments, AnsiColor, Background, Brush, RenderConfig, StyledText};
    ///
    /// let red = Brush::new(AnsiColor::Red, Background::Default);
    /// let blue = Brush::new(AnsiColor::Blue, Background::Default);
    ///
    /// let poem = StyledText::join(fragments![
    ///     red.paint(["Roses are red"]),
    ///     ",\n",
    ///     blue.paint(["Violets are blue"]),
    /// ]);
    /// assert_eq!(
    ///     poem.render(&RenderConfig::enabled()),
    ///     "\x1b[31mRoses are red\x1b[0m,\n\x1b[34mViolets are blue\x1b[0m"
    /// );
    /// ```
    pub fn join<I, F>(fragments: I) -> StyledText
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        let mut text = StyledText::empty();
        text.append_all(fragments);
        text
    }

    /// The text without any styling
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The styled ranges, in ascending order
    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// Length of the content in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if there is no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Drops the spans and returns the content.
    pub fn into_content(self) -> String {
        self.content
    }

    pub(crate) fn into_parts(self) -> (String, Vec<StyleSpan>) {
        (self.content, self.spans)
    }

    /// Appends a fragment at the end.
    ///
    /// - Raw text is added verbatim and stays a gap.
    /// - Painted text gets a span carrying its own style.
    /// - Styled text brings its spans along, shifted by the current length.
    pub fn append<F: Into<Fragment>>(&mut self, fragment: F) -> &mut Self {
        match fragment.into() {
            Fragment::Raw(raw) => self.push_raw(&raw),
            Fragment::Styled(painted) => {
                let (content, style) = painted.into_parts();
                self.push_region(&content, Some(style));
            }
            Fragment::Rich(rich) => self.push_rich(rich),
        }
        self
    }

    /// Appends every fragment in order.
    pub fn append_all<I, F>(&mut self, fragments: I) -> &mut Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        for fragment in fragments {
            self.append(fragment);
        }
        self
    }

    /// Appends `content` as a verbatim region.
    ///
    /// The region renders unwrapped like a gap, but when this text is later
    /// embedded the region is left alone instead of taking the ambient style.
    pub fn append_verbatim(&mut self, content: &str) -> &mut Self {
        self.push_region(content, None);
        self
    }

    /// Walks the content as alternating gaps and spans.
    pub fn pieces(&self) -> Pieces<'_> {
        Pieces {
            text: self,
            cursor: 0,
            index: 0,
        }
    }

    /// Byte ranges not covered by any span.
    pub fn gaps(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.pieces().filter_map(|piece| match piece {
            Piece::Gap { range, .. } => Some(range),
            Piece::Span { .. } => None,
        })
    }

    /// Render with the given configuration.
    pub fn render(&self, config: &RenderConfig) -> String {
        Renderer::new(*config).render(self)
    }

    /// Write the rendered text to `writer`.
    pub fn write_str<W: std::fmt::Write>(
        &self,
        writer: &mut W,
        config: &RenderConfig,
    ) -> std::fmt::Result {
        Renderer::new(*config).write_str(writer, self)
    }

    /// Adds content without a span.
    pub(crate) fn push_raw(&mut self, raw: &str) {
        self.content.push_str(raw);
    }

    /// Adds content covered by a single span. Empty content adds nothing.
    pub(crate) fn push_region(&mut self, content: &str, style: Option<Style>) {
        if content.is_empty() {
            return;
        }
        let start = self.content.len();
        self.content.push_str(content);
        self.push_span(start..self.content.len(), style);
    }

    /// Adds a span over content that is already in the buffer.
    ///
    /// # Panics
    ///
    /// Panics if the range starts before the end of the last span.
    pub(crate) fn push_span(&mut self, range: Range<usize>, style: Option<Style>) {
        self.check_order(range.start);
        self.spans
            .push(StyleSpan::new(range, style, self.content.len()));
    }

    /// Adds a span taken from another buffer whose content now starts at `offset`.
    pub(crate) fn push_shifted(&mut self, span: StyleSpan, offset: usize) {
        let span = span.shifted(offset, self.content.len());
        self.check_order(span.start());
        self.spans.push(span);
    }

    fn push_rich(&mut self, rich: StyledText) {
        let offset = self.content.len();
        let (content, spans) = rich.into_parts();
        self.content.push_str(&content);
        trace!(offset, spans = spans.len(), "Appending styled text");
        for span in spans {
            self.push_shifted(span, offset);
        }
    }

    fn check_order(&self, start: usize) {
        if let Some(last) = self.spans.last() {
            assert!(
                last.end() <= start,
                "span starting at {start} overlaps span {:?}",
                last.range()
            );
        }
    }
}

/// A contiguous piece of a [`StyledText`], as yielded by [`StyledText::pieces`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Content not covered by any span
    Gap {
        /// Byte range inside the content
        range: Range<usize>,
        /// The gap's text
        text: &'a str,
    },
    /// Content covered by a span
    Span {
        /// The covering span
        span: &'a StyleSpan,
        /// The span's text
        text: &'a str,
    },
}

impl<'a> Piece<'a> {
    /// The text of this piece
    pub fn text(&self) -> &'a str {
        match self {
            Piece::Gap { text, .. } | Piece::Span { text, .. } => text,
        }
    }

    /// The style to wrap this piece in, if any
    pub fn style(&self) -> Option<&'a Style> {
        match self {
            Piece::Gap { .. } => None,
            Piece::Span { span, .. } => span.style(),
        }
    }
}

/// Iterator over the gaps and spans of a [`StyledText`], left to right.
#[derive(Clone, Debug)]
pub struct Pieces<'a> {
    text: &'a StyledText,
    cursor: usize,
    index: usize,
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        let content = self.text.content();
        match self.text.spans.get(self.index) {
            Some(span) if self.cursor < span.start() => {
                let range = self.cursor..span.start();
                self.cursor = span.start();
                Some(Piece::Gap {
                    text: &content[range.clone()],
                    range,
                })
            }
            Some(span) => {
                self.index += 1;
                self.cursor = span.end();
                Some(Piece::Span {
                    span,
                    text: span.slice(content),
                })
            }
            None if self.cursor < content.len() => {
                let range = self.cursor..content.len();
                self.cursor = content.len();
                Some(Piece::Gap {
                    text: &content[range.clone()],
                    range,
                })
            }
            None => None,
        }
    }
}

/// Always renders with escape sequences; use [`StyledText::render`] to honor a
/// [`RenderConfig`].
impl std::fmt::Display for StyledText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_str(f, &RenderConfig::enabled())
    }
}

impl From<&str> for StyledText {
    fn from(value: &str) -> Self {
        StyledText::plain(value)
    }
}

impl From<String> for StyledText {
    fn from(value: String) -> Self {
        StyledText::plain(value)
    }
}

impl<F: Into<Fragment>> std::ops::Add<F> for StyledText {
    type Output = Self;
    fn add(mut self, other: F) -> Self {
        self.append(other);
        self
    }
}

impl<F: Into<Fragment>> std::ops::AddAssign<F> for StyledText {
    fn add_assign(&mut self, other: F) {
        self.append(other);
    }
}

impl<F: Into<Fragment>> Extend<F> for StyledText {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<F: Into<Fragment>> FromIterator<F> for StyledText {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        StyledText::join(iter)
    }
}
