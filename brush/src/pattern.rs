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

use regex::Regex;
use std::ops::Range;

/// Something that can locate matches in a piece of text.
///
/// Implementations scan `haystack` from left to right and return the byte
/// ranges of every match. Ranges must be ascending, must not overlap and must
/// fall on `char` boundaries. Empty ranges are allowed; highlighting ignores
/// them.
pub trait Pattern {
    /// Every match of this pattern in `haystack`, leftmost first.
    fn find_ranges(&self, haystack: &str) -> Vec<Range<usize>>;
}

impl Pattern for Regex {
    fn find_ranges(&self, haystack: &str) -> Vec<Range<usize>> {
        self.find_iter(haystack).map(|found| found.range()).collect()
    }
}

/// Literal substring search.
impl Pattern for str {
    fn find_ranges(&self, haystack: &str) -> Vec<Range<usize>> {
        if self.is_empty() {
            return Vec::new();
        }
        haystack
            .match_indices(self)
            .map(|(start, found)| start..start + found.len())
            .collect()
    }
}

impl Pattern for String {
    fn find_ranges(&self, haystack: &str) -> Vec<Range<usize>> {
        self.as_str().find_ranges(haystack)
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn find_ranges(&self, haystack: &str) -> Vec<Range<usize>> {
        (**self).find_ranges(haystack)
    }
}
