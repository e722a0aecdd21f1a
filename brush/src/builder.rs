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

use crate::{BrushResult, Fragment, Pattern, Piece, Style, StyledText};
use regex::Regex;
use tracing::trace;

/// Produces [`StyledText`] from raw text, patterns and other fragments.
///
/// A builder carries an *ambient* style. Highlighting applies it to every
/// match; embedding applies it to everything that has no style of its own.
///
/// # Examples
///
/// ```rust
/// use brushwork::{AnsiColor, Background, RenderConfig, SpanBuilder, Style};
/// use regex::Regex;
///
/// let red = SpanBuilder::new(Style::new(&AnsiColor::Red, &Background::Default));
/// let text = red.highlight("trashredgarbage", &Regex::new("red").unwrap());
///
/// assert_eq!(
///     text.render(&RenderConfig::enabled()),
///     "trash\x1b[31mred\x1b[0mgarbage"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanBuilder {
    ambient: Style,
}

impl SpanBuilder {
    /// Create a builder applying `ambient`.
    pub fn new(ambient: Style) -> SpanBuilder {
        SpanBuilder { ambient }
    }

    /// The style applied to matches and unstyled fragments
    pub fn ambient(&self) -> &Style {
        &self.ambient
    }

    /// Style every match of `pattern` in `content`.
    ///
    /// The content is kept as is. Each non-empty match becomes a span with the
    /// ambient style; empty matches are skipped. Without any match the result
    /// holds the content and no spans.
    pub fn highlight<P: Pattern + ?Sized>(&self, content: &str, pattern: &P) -> StyledText {
        let mut text = StyledText::plain(content);
        for range in pattern.find_ranges(content) {
            if range.is_empty() {
                continue;
            }
            text.push_span(range, Some(self.ambient.clone()));
        }
        trace!(spans = text.spans().len(), "Highlighted content");
        text
    }

    /// Replace every match of `pattern` with `transform(match)` and style the
    /// replacement.
    ///
    /// Text between matches is copied unstyled. A replacement that comes back
    /// empty contributes nothing and gets no span. Without any match the
    /// content is returned unchanged.
    ///
    /// ```rust
    /// use brushwork::{AnsiColor, Background, RenderConfig, SpanBuilder, Style};
    /// use regex::Regex;
    ///
    /// let yellow = SpanBuilder::new(Style::new(&AnsiColor::Yellow, &Background::Default));
    /// let text = yellow.highlight_func(
    ///     "this is uppercase text",
    ///     &Regex::new("uppercase").unwrap(),
    ///     |found| found.to_uppercase(),
    /// );
    /// assert_eq!(
    ///     text.render(&RenderConfig::enabled()),
    ///     "this is \x1b[33mUPPERCASE\x1b[0m text"
    /// );
    /// ```
    pub fn highlight_func<P, F>(&self, content: &str, pattern: &P, mut transform: F) -> StyledText
    where
        P: Pattern + ?Sized,
        F: FnMut(&str) -> String,
    {
        let ranges = pattern.find_ranges(content);
        if ranges.is_empty() {
            return StyledText::plain(content);
        }

        let mut text = StyledText::empty();
        let mut cursor = 0;
        for range in ranges {
            assert!(
                cursor <= range.start,
                "match {range:?} overlaps previous match ending at {cursor}"
            );
            text.push_raw(&content[cursor..range.start]);
            let replacement = transform(&content[range.clone()]);
            text.push_region(&replacement, Some(self.ambient.clone()));
            cursor = range.end;
        }
        text.push_raw(&content[cursor..]);
        trace!(spans = text.spans().len(), "Replaced matches");
        text
    }

    /// Compile `pattern` as a regular expression and [`highlight`](SpanBuilder::highlight)
    /// with it.
    pub fn highlight_regex(&self, content: &str, pattern: &str) -> BrushResult<StyledText> {
        let regex = Regex::new(pattern)?;
        Ok(self.highlight(content, &regex))
    }

    /// Compose fragments under the ambient style.
    ///
    /// - Raw text is covered by an ambient span, one per fragment.
    /// - Painted text keeps its own style.
    /// - Styled text keeps its spans; every gap inside it, including a
    ///   trailing one, is covered by an ambient span. Verbatim regions stay
    ///   verbatim.
    ///
    /// The innermost explicit style always wins.
    pub fn embed<I, F>(&self, fragments: I) -> StyledText
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        let mut text = StyledText::empty();
        for fragment in fragments {
            match fragment.into() {
                Fragment::Raw(raw) => text.push_region(&raw, Some(self.ambient.clone())),
                Fragment::Styled(painted) => {
                    let (content, style) = painted.into_parts();
                    text.push_region(&content, Some(style));
                }
                Fragment::Rich(rich) => self.fill(&mut text, &rich),
            }
        }
        trace!(
            len = text.len(),
            spans = text.spans().len(),
            "Embedded fragments"
        );
        text
    }

    fn fill(&self, text: &mut StyledText, rich: &StyledText) {
        for piece in rich.pieces() {
            match piece {
                Piece::Gap { text: gap, .. } => {
                    text.push_region(gap, Some(self.ambient.clone()));
                }
                Piece::Span { span, text: slice } => {
                    text.push_region(slice, span.style().cloned());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnsiColor, Background, Painted, RenderConfig, StyleSpan, fragments};
    use tracing_test::traced_test;

    fn style(foreground: AnsiColor, background: Background<AnsiColor>) -> Style {
        Style::new(&foreground, &background)
    }

    fn builder(foreground: AnsiColor) -> SpanBuilder {
        SpanBuilder::new(style(foreground, Background::Default))
    }

    fn render(text: &StyledText) -> String {
        text.render(&RenderConfig::enabled())
    }

    fn vowels() -> Regex {
        Regex::new("(?i)[aeiou]").unwrap()
    }

    #[test]
    fn test_highlight_single_match() {
        let text = builder(AnsiColor::Red).highlight("trashredgarbage", &Regex::new("red").unwrap());
        assert_eq!(text.content(), "trashredgarbage");
        assert_eq!(text.spans().len(), 1);
        assert_eq!(text.spans()[0].range(), 5..8);
        assert_eq!(render(&text), "trash\x1b[31mred\x1b[0mgarbage");
    }

    #[test]
    fn test_highlight_multiple_matches() {
        let text = builder(AnsiColor::Red).highlight(
            "trash red banana trash red lolred",
            &Regex::new("red").unwrap(),
        );
        assert_eq!(
            render(&text),
            "trash \x1b[31mred\x1b[0m banana trash \x1b[31mred\x1b[0m lol\x1b[31mred\x1b[0m"
        );
    }

    #[test]
    fn test_highlight_no_match() {
        let text = builder(AnsiColor::Red).highlight("trashgarbage", &Regex::new("red").unwrap());
        assert!(text.spans().is_empty());
        assert_eq!(render(&text), "trashgarbage");
    }

    #[test]
    fn test_highlight_skips_empty_matches() {
        let text = builder(AnsiColor::Red).highlight("abc", &Regex::new("b*").unwrap());
        let ranges: Vec<_> = text.spans().iter().map(StyleSpan::range).collect();
        assert_eq!(ranges, vec![1..2]);
    }

    #[test]
    fn test_highlight_literal() {
        let text = builder(AnsiColor::Green).highlight("go go gadget", "go");
        assert_eq!(text.spans().len(), 2);
        assert_eq!(
            render(&text),
            "\x1b[32mgo\x1b[0m \x1b[32mgo\x1b[0m gadget"
        );
    }

    #[test]
    fn test_highlight_regex() {
        let text = builder(AnsiColor::Red)
            .highlight_regex("trashredgarbage", "red")
            .unwrap();
        assert_eq!(render(&text), "trash\x1b[31mred\x1b[0mgarbage");

        let error = builder(AnsiColor::Red)
            .highlight_regex("anything", "(unclosed")
            .unwrap_err();
        assert!(matches!(error, crate::BrushError::Pattern(_)));
    }

    #[test]
    fn test_highlight_func_uppercase() {
        let marker = SpanBuilder::new(style(
            AnsiColor::Black,
            Background::Explicit(AnsiColor::BrightYellow),
        ));
        let text = marker.highlight_func(
            "this is uppercase and yellow",
            &Regex::new("uppercase").unwrap(),
            |found| found.to_uppercase(),
        );
        assert_eq!(text.content(), "this is UPPERCASE and yellow");
        assert_eq!(
            render(&text),
            "this is \x1b[30;103mUPPERCASE\x1b[0m and yellow"
        );
    }

    #[test]
    fn test_highlight_func_yellow_uppercase() {
        let text = builder(AnsiColor::Yellow).highlight_func(
            "this is uppercase text",
            &Regex::new("uppercase").unwrap(),
            |found| found.to_uppercase(),
        );
        assert_eq!(render(&text), "this is \x1b[33mUPPERCASE\x1b[0m text");
    }

    #[test]
    #[should_panic(expected = "overlaps previous match")]
    fn test_highlight_func_overlapping_matches_panics() {
        struct Overlapping;

        impl Pattern for Overlapping {
            fn find_ranges(&self, _haystack: &str) -> Vec<std::ops::Range<usize>> {
                vec![0..3, 2..4]
            }
        }

        let _ = builder(AnsiColor::Red).highlight_func("abcdef", &Overlapping, |found| {
            found.to_uppercase()
        });
    }

    #[test]
    fn test_highlight_func_changes_length() {
        let text = builder(AnsiColor::Red).highlight_func(
            "a-b-c",
            &Regex::new("-").unwrap(),
            |_| String::from(" :: "),
        );
        assert_eq!(text.content(), "a :: b :: c");
        let ranges: Vec<_> = text.spans().iter().map(StyleSpan::range).collect();
        assert_eq!(ranges, vec![1..5, 6..10]);
    }

    #[test]
    fn test_highlight_func_empty_replacement() {
        let text = builder(AnsiColor::Red).highlight_func(
            "keep drop keep",
            &Regex::new("drop ").unwrap(),
            |_| String::new(),
        );
        assert_eq!(text.content(), "keep keep");
        assert!(text.spans().is_empty());
    }

    #[test]
    fn test_highlight_func_no_match() {
        let mut calls = 0;
        let text = builder(AnsiColor::Red).highlight_func(
            "nothing here",
            &Regex::new("red").unwrap(),
            |found| {
                calls += 1;
                found.to_string()
            },
        );
        assert_eq!(calls, 0);
        assert_eq!(text, StyledText::plain("nothing here"));
    }

    #[test]
    fn test_embed_raw_and_painted() {
        let banana = Painted::new(
            "banana",
            style(AnsiColor::Black, Background::Explicit(AnsiColor::Yellow)),
        );
        let text = builder(AnsiColor::Red).embed(fragments![
            Fragment::display(&1),
            " ",
            "cool",
            " ",
            banana
        ]);
        assert_eq!(text.content(), "1 cool banana");
        assert_eq!(
            render(&text),
            "\x1b[31m1\x1b[0m\x1b[31m \x1b[0m\x1b[31mcool\x1b[0m\x1b[31m \x1b[0m\x1b[30;43mbanana\x1b[0m"
        );
    }

    #[test]
    fn test_embed_fills_gaps_of_highlighted_text() {
        let marker = SpanBuilder::new(style(
            AnsiColor::Black,
            Background::Explicit(AnsiColor::Yellow),
        ));
        let fox = marker.highlight("A fox jumps over the lazy dog", &vowels());
        let text = builder(AnsiColor::Red).embed(fragments![fox, "!"]);

        assert_eq!(
            render(&text),
            "\x1b[30;43mA\x1b[0m\x1b[31m f\x1b[0m\x1b[30;43mo\x1b[0m\x1b[31mx j\x1b[0m\
             \x1b[30;43mu\x1b[0m\x1b[31mmps \x1b[0m\x1b[30;43mo\x1b[0m\x1b[31mv\x1b[0m\
             \x1b[30;43me\x1b[0m\x1b[31mr th\x1b[0m\x1b[30;43me\x1b[0m\x1b[31m l\x1b[0m\
             \x1b[30;43ma\x1b[0m\x1b[31mzy d\x1b[0m\x1b[30;43mo\x1b[0m\x1b[31mg\x1b[0m\
             \x1b[31m!\x1b[0m"
        );
        assert_eq!(text.gaps().count(), 0);
    }

    #[test]
    fn test_embed_sun_is_yellow() {
        let yellow = builder(AnsiColor::Yellow);
        let green = style(AnsiColor::Green, Background::Default);
        let sun = yellow.highlight("Sun is yellow\n", &Regex::new("Sun|yellow").unwrap());

        let text = builder(AnsiColor::Blue).embed(fragments![
            sun,
            Painted::new("Grass", green.clone()),
            " is ",
            Painted::new("green", green),
            "\nAll the rest is blue",
        ]);

        assert_eq!(
            render(&text),
            "\x1b[33mSun\x1b[0m\x1b[34m is \x1b[0m\x1b[33myellow\x1b[0m\x1b[34m\n\x1b[0m\
             \x1b[32mGrass\x1b[0m\x1b[34m is \x1b[0m\x1b[32mgreen\x1b[0m\
             \x1b[34m\nAll the rest is blue\x1b[0m"
        );
    }

    #[test]
    fn test_embed_nested() {
        let inner = builder(AnsiColor::Green).embed(fragments![
            "in",
            StyledText::plain("gap"),
        ]);
        let outer = builder(AnsiColor::Red).embed(fragments![inner, StyledText::plain("out")]);

        let styles: Vec<_> = outer
            .spans()
            .iter()
            .map(|span| span.style().map(Style::sgr_params))
            .collect();
        assert_eq!(
            styles,
            vec![
                Some("32".to_string()),
                Some("32".to_string()),
                Some("31".to_string())
            ]
        );
    }

    #[test]
    fn test_embed_keeps_verbatim_regions() {
        let mut rich = StyledText::empty();
        rich.append_verbatim("raw").append("gap");

        let text = builder(AnsiColor::Red).embed([rich]);
        assert_eq!(text.spans().len(), 2);
        assert!(!text.spans()[0].is_styled());
        assert_eq!(render(&text), "raw\x1b[31mgap\x1b[0m");
    }

    #[test]
    fn test_embed_skips_empty_fragments() {
        let text = builder(AnsiColor::Red).embed(fragments!["", StyledText::empty(), "x"]);
        assert_eq!(text.spans().len(), 1);
        assert_eq!(text.spans()[0].range(), 0..1);
    }

    #[test]
    #[traced_test]
    fn test_builder_logs_composition() {
        let text = builder(AnsiColor::Red).highlight("trashredgarbage", &Regex::new("red").unwrap());
        let _ = builder(AnsiColor::Blue).embed([text]);
        assert!(logs_contain("Highlighted content"));
        assert!(logs_contain("Embedded fragments"));
    }
}
