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

use crate::Style;
use std::ops::Range;

/// A styled, half-open byte range over the content of one [`StyledText`](crate::StyledText).
///
/// Spans are produced only by this crate. A span without a style marks an
/// explicit verbatim region: it renders unwrapped and composition never fills
/// it with an ambient style.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleSpan {
    start: usize,
    end: usize,
    style: Option<Style>,
}

impl StyleSpan {
    /// Create a span over `range` of a buffer `content_len` bytes long.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty or inverted, or if it ends past
    /// `content_len`. Both are bugs in the code producing the span.
    pub(crate) fn new(range: Range<usize>, style: Option<Style>, content_len: usize) -> StyleSpan {
        assert!(
            range.start < range.end,
            "span {range:?} is empty or inverted"
        );
        assert!(
            range.end <= content_len,
            "span {range:?} exceeds content length {content_len}"
        );
        StyleSpan {
            start: range.start,
            end: range.end,
            style,
        }
    }

    /// Inclusive start offset
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end offset
    pub fn end(&self) -> usize {
        self.end
    }

    /// The covered byte range
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of bytes covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false`; spans are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The style of this span, `None` for a verbatim region
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// Returns `true` if the span carries a style.
    pub fn is_styled(&self) -> bool {
        self.style.is_some()
    }

    /// The same span moved `offset` bytes to the right inside a buffer
    /// `content_len` bytes long.
    pub(crate) fn shifted(self, offset: usize, content_len: usize) -> StyleSpan {
        StyleSpan::new(
            self.start + offset..self.end + offset,
            self.style,
            content_len,
        )
    }

    /// The slice of `content` this span covers.
    pub(crate) fn slice<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start..self.end]
    }
}
