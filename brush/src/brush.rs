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

use crate::painted::{concat_content, concat_line};
use crate::{
    Background, BrushResult, ColorModel, Fragment, Painted, Pattern, RenderConfig, SpanBuilder,
    Style, StyledText,
};
use std::io::Write;

/// A foreground and background selection that can be changed in place.
///
/// A brush remembers the colors it was created with, so it can always go back
/// to them with [`use_default_color`](Brush::use_default_color). Every
/// painting or highlighting call takes the current selection.
///
/// # Examples
///
/// ```rust
/// use brushwork::{AnsiColor, Background, Brush};
///
/// let mut brush = Brush::new(AnsiColor::Black, Background::Explicit(AnsiColor::White));
/// assert_eq!(brush.style().sgr_params(), "30;47");
///
/// brush.swap();
/// assert_eq!(brush.style().sgr_params(), "37;40");
///
/// brush.use_bg_transparent();
/// assert_eq!(brush.style().sgr_params(), "37");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Brush<C> {
    default_foreground: C,
    default_background: Background<C>,
    foreground: C,
    background: Background<C>,
}

impl<C: ColorModel + Copy> Brush<C> {
    /// Create a brush whose current and default colors are the given ones.
    pub fn new(foreground: C, background: Background<C>) -> Brush<C> {
        Brush {
            default_foreground: foreground,
            default_background: background,
            foreground,
            background,
        }
    }

    /// Current foreground
    pub fn foreground(&self) -> C {
        self.foreground
    }

    /// Current background
    pub fn background(&self) -> Background<C> {
        self.background
    }

    /// Select a new foreground.
    pub fn use_font_color(&mut self, color: C) -> &mut Self {
        self.foreground = color;
        self
    }

    /// Select an explicit background.
    pub fn use_bg_color(&mut self, color: C) -> &mut Self {
        self.background = Background::Explicit(color);
        self
    }

    /// Go back to the terminal's default background.
    pub fn use_bg_transparent(&mut self) -> &mut Self {
        self.background = Background::Default;
        self
    }

    /// Exchange foreground and background.
    ///
    /// The old foreground becomes the background. The old background becomes
    /// the foreground, or the default foreground when no background was set.
    pub fn swap(&mut self) -> &mut Self {
        let foreground = self.background.or(self.default_foreground);
        self.background = Background::Explicit(self.foreground);
        self.foreground = foreground;
        self
    }

    /// Restore the colors the brush was created with.
    pub fn use_default_color(&mut self) -> &mut Self {
        self.foreground = self.default_foreground;
        self.background = self.default_background;
        self
    }

    /// The style for the current selection
    pub fn style(&self) -> Style {
        Style::new(&self.foreground, &self.background)
    }

    /// A [`SpanBuilder`] applying the current selection.
    pub fn builder(&self) -> SpanBuilder {
        SpanBuilder::new(self.style())
    }

    /// Paint the concatenated content of `values`.
    pub fn paint<I, F>(&self, values: I) -> Painted
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        Painted::new(concat_content(values), self.style())
    }

    /// Paint `values` joined by spaces, with a trailing newline.
    pub fn paintln<I, F>(&self, values: I) -> Painted
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        Painted::new(concat_line(values), self.style())
    }

    /// Paint formatted text.
    ///
    /// ```rust
    /// use brushwork::{AnsiColor, Background, Brush};
    ///
    /// let brush = Brush::new(AnsiColor::Green, Background::Default);
    /// let painted = brush.paint_fmt(format_args!("{} apples", 3));
    /// assert_eq!(painted.to_string(), "\x1b[32m3 apples\x1b[0m");
    /// ```
    pub fn paint_fmt(&self, args: std::fmt::Arguments<'_>) -> Painted {
        Painted::new(args.to_string(), self.style())
    }

    /// See [`SpanBuilder::highlight`].
    pub fn highlight<P: Pattern + ?Sized>(&self, content: &str, pattern: &P) -> StyledText {
        self.builder().highlight(content, pattern)
    }

    /// See [`SpanBuilder::highlight_func`].
    pub fn highlight_func<P, F>(&self, content: &str, pattern: &P, transform: F) -> StyledText
    where
        P: Pattern + ?Sized,
        F: FnMut(&str) -> String,
    {
        self.builder().highlight_func(content, pattern, transform)
    }

    /// See [`SpanBuilder::embed`].
    pub fn embed<I, F>(&self, fragments: I) -> StyledText
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.builder().embed(fragments)
    }

    /// Print painted `values` to standard output.
    pub fn print<I, F>(&self, config: &RenderConfig, values: I) -> BrushResult<()>
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.write_to(&mut std::io::stdout().lock(), config, &self.paint(values))
    }

    /// Print painted `values` to standard output, joined by spaces and
    /// followed by a newline.
    pub fn println<I, F>(&self, config: &RenderConfig, values: I) -> BrushResult<()>
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.write_to(&mut std::io::stdout().lock(), config, &self.paintln(values))
    }

    /// Print painted formatted text to standard output.
    pub fn print_fmt(&self, config: &RenderConfig, args: std::fmt::Arguments<'_>) -> BrushResult<()> {
        self.write_to(&mut std::io::stdout().lock(), config, &self.paint_fmt(args))
    }

    fn write_to<W: Write>(&self, writer: &mut W, config: &RenderConfig, painted: &Painted) -> BrushResult<()> {
        writer.write_all(painted.render(config).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnsiColor, ExtendedColor, TrueColor, fragments};
    use regex::Regex;

    #[test]
    fn test_brush_swap() {
        let mut brush = Brush::new(AnsiColor::Black, Background::Explicit(AnsiColor::White));
        brush.swap();
        assert_eq!(brush.paint(["Hello"]).to_string(), "\x1b[37;40mHello\x1b[0m");
    }

    #[test]
    fn test_brush_swap_without_background() {
        let mut brush = Brush::new(AnsiColor::Red, Background::Default);
        brush.use_font_color(AnsiColor::Blue).swap();
        assert_eq!(brush.foreground(), AnsiColor::Red);
        assert_eq!(brush.background(), Background::Explicit(AnsiColor::Blue));
        assert_eq!(brush.style().sgr_params(), "31;44");
    }

    #[test]
    fn test_brush_background_changes() {
        let mut brush = Brush::new(AnsiColor::Black, Background::Default);
        brush.use_bg_color(AnsiColor::Cyan);
        assert_eq!(brush.paint(["x"]).to_string(), "\x1b[30;46mx\x1b[0m");
        brush.use_bg_transparent();
        assert_eq!(brush.paint(["x"]).to_string(), "\x1b[30mx\x1b[0m");
    }

    #[test]
    fn test_brush_use_default_color() {
        let mut brush = Brush::new(AnsiColor::Green, Background::Explicit(AnsiColor::Black));
        brush
            .use_font_color(AnsiColor::Red)
            .use_bg_transparent()
            .use_default_color();
        assert_eq!(brush.style().sgr_params(), "32;40");
    }

    #[test]
    fn test_brush_color_models() {
        let brush = Brush::new(ExtendedColor(0), Background::Explicit(ExtendedColor(218)));
        assert_eq!(
            brush.paint(["Hello"]).to_string(),
            "\x1b[38;5;0;48;5;218mHello\x1b[0m"
        );

        let brush = Brush::new(
            TrueColor::new(255, 82, 197),
            Background::Explicit(TrueColor::new(155, 106, 0)),
        );
        assert_eq!(
            brush.paint(["Hi"]).to_string(),
            "\x1b[38;2;255;82;197;48;2;155;106;0mHi\x1b[0m"
        );
    }

    #[test]
    fn test_brush_paint_and_paintln() {
        let brush = Brush::new(AnsiColor::Yellow, Background::Explicit(AnsiColor::Blue));
        assert_eq!(
            brush
                .paint(fragments![Fragment::display(&1), " ", "cool", " reversed"])
                .to_string(),
            "\x1b[33;44m1 cool reversed\x1b[0m"
        );
        assert_eq!(
            brush.paintln(["a", "b"]).content(),
            "a b\n"
        );
    }

    #[test]
    fn test_brush_builder_uses_current_style() {
        let mut brush = Brush::new(AnsiColor::Red, Background::Default);
        let before = brush.builder();
        brush.use_font_color(AnsiColor::Blue);
        assert_eq!(before.ambient().sgr_params(), "31");
        assert_eq!(brush.builder().ambient().sgr_params(), "34");
    }

    #[test]
    fn test_brush_highlight_then_append() {
        let marker = Brush::new(AnsiColor::Black, Background::Explicit(AnsiColor::Yellow));
        let mut text = marker.highlight("Hello world!", &Regex::new("Hello").unwrap());
        text.append_all(fragments![" ", marker.paint(["Hi"]), " everyone!"]);
        assert_eq!(
            text.to_string(),
            "\x1b[30;43mHello\x1b[0m world! \x1b[30;43mHi\x1b[0m everyone!"
        );
    }

    #[test]
    fn test_brush_delegates_to_builder() {
        let brush = Brush::new(AnsiColor::Red, Background::Default);
        let pattern = Regex::new("red").unwrap();
        assert_eq!(
            brush.highlight("trashredgarbage", &pattern),
            brush.builder().highlight("trashredgarbage", &pattern)
        );
        assert_eq!(
            brush.highlight_func("red", &pattern, |found| found.to_uppercase()).content(),
            "RED"
        );
        assert_eq!(brush.embed(["x"]).spans().len(), 1);
    }

    fn printed(brush: &Brush<AnsiColor>, config: &RenderConfig, painted: &Painted) -> String {
        let mut sink = Vec::new();
        brush.write_to(&mut sink, config, painted).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_brush_print_paths() {
        let brush = Brush::new(AnsiColor::Black, Background::Explicit(AnsiColor::White));
        let config = RenderConfig::enabled();

        assert_eq!(
            printed(&brush, &config, &brush.paint(["Hello", " World"])),
            "\x1b[30;47mHello World\x1b[0m"
        );
        assert_eq!(
            printed(&brush, &config, &brush.paintln(["Hello", "World"])),
            "\x1b[30;47mHello World\n\x1b[0m"
        );
        assert_eq!(
            printed(
                &brush,
                &config,
                &brush.paint_fmt(format_args!("{} {}", "Hello", "World"))
            ),
            "\x1b[30;47mHello World\x1b[0m"
        );
    }

    #[test]
    fn test_brush_print_disabled() {
        let brush = Brush::new(AnsiColor::Black, Background::Explicit(AnsiColor::White));
        assert_eq!(
            printed(&brush, &RenderConfig::disabled(), &brush.paintln(["something"])),
            "something\n"
        );
    }
}
