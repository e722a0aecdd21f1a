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

use crate::{Painted, StyledText};
use std::fmt::Display;

/// A value taking part in composition.
///
/// Every operation that merges text ([`StyledText::append`],
/// [`SpanBuilder::embed`](crate::SpanBuilder::embed), painting) accepts anything
/// convertible into a `Fragment`. Values that are neither strings nor styled
/// text enter through [`Fragment::display`].
///
/// | Variant  | Append             | Embed                                  |
/// |----------|--------------------|----------------------------------------|
/// | `Raw`    | unstyled gap       | ambient style                          |
/// | `Styled` | its own style      | its own style                          |
/// | `Rich`   | its own spans      | its own spans, gaps get ambient style  |
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    /// Plain text without styling
    Raw(String),
    /// Text carrying a single style
    Styled(Painted),
    /// Text with its own span list
    Rich(StyledText),
}

impl Fragment {
    /// Stringify any displayable value into a raw fragment.
    ///
    /// ```
    /// use brushwork::Fragment;
    ///
    /// assert_eq!(Fragment::display(&3), Fragment::Raw("3".to_string()));
    /// ```
    pub fn display<T: Display + ?Sized>(value: &T) -> Fragment {
        Fragment::Raw(value.to_string())
    }

    /// The text of this fragment without any styling.
    pub fn content(&self) -> &str {
        match self {
            Fragment::Raw(raw) => raw,
            Fragment::Styled(painted) => painted.content(),
            Fragment::Rich(rich) => rich.content(),
        }
    }

    /// Length of the content in bytes
    pub fn len(&self) -> usize {
        self.content().len()
    }

    /// Returns `true` if the fragment has no content.
    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }
}

impl From<&str> for Fragment {
    fn from(value: &str) -> Self {
        Fragment::Raw(value.to_string())
    }
}

impl From<String> for Fragment {
    fn from(value: String) -> Self {
        Fragment::Raw(value)
    }
}

impl From<&String> for Fragment {
    fn from(value: &String) -> Self {
        Fragment::Raw(value.clone())
    }
}

impl From<char> for Fragment {
    fn from(value: char) -> Self {
        Fragment::Raw(value.to_string())
    }
}

impl From<Painted> for Fragment {
    fn from(value: Painted) -> Self {
        Fragment::Styled(value)
    }
}

impl From<&Painted> for Fragment {
    fn from(value: &Painted) -> Self {
        Fragment::Styled(value.clone())
    }
}

impl From<StyledText> for Fragment {
    fn from(value: StyledText) -> Self {
        Fragment::Rich(value)
    }
}

impl From<&StyledText> for Fragment {
    fn from(value: &StyledText) -> Self {
        Fragment::Rich(value.clone())
    }
}

/// Build a `Vec<Fragment>` from values of mixed types.
///
/// ```
/// use brushwork::{fragments, AnsiColor, Background, Brush, Fragment};
///
/// let green = Brush::new(AnsiColor::Green, Background::Default);
/// let parts = fragments!["Grass", " is ", green.paint(["green"]), Fragment::display(&1)];
/// assert_eq!(parts.len(), 4);
/// ```
#[macro_export]
macro_rules! fragments {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Fragment::from($value)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnsiColor, Background, Style};

    #[test]
    fn test_raw_conversions() {
        assert_eq!(Fragment::from("text"), Fragment::Raw("text".to_string()));
        assert_eq!(
            Fragment::from(String::from("text")),
            Fragment::Raw("text".to_string())
        );
        assert_eq!(Fragment::from('!'), Fragment::Raw("!".to_string()));
        assert_eq!(Fragment::display(&42u8), Fragment::Raw("42".to_string()));
    }

    #[test]
    fn test_content_of_each_variant() {
        let style = Style::new(&AnsiColor::Red, &Background::Default);
        let painted = Painted::new("red", style);
        let rich = StyledText::plain("rich");

        assert_eq!(Fragment::from(&painted).content(), "red");
        assert_eq!(Fragment::from(&rich).content(), "rich");
        assert_eq!(Fragment::from("raw").len(), 3);
        assert!(Fragment::from("").is_empty());
    }

    #[test]
    fn test_fragments_macro() {
        let style = Style::new(&AnsiColor::Red, &Background::Default);
        let parts = fragments!["a", String::from("b"), Painted::new("c", style)];
        assert_eq!(parts.len(), 3);
        assert!(matches!(parts[2], Fragment::Styled(_)));

        let empty: Vec<Fragment> = fragments![];
        assert!(empty.is_empty());
    }
}
