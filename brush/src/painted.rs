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

use crate::{Background, ColorModel, Fragment, RenderConfig, Style};

/// Text painted with one style from end to end.
///
/// A `Painted` value is the degenerate form of a [`StyledText`](crate::StyledText):
/// a single span covering the whole content. When appended or embedded it
/// keeps its own style.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Painted {
    content: String,
    style: Style,
}

impl Painted {
    /// Paint `content` with `style`.
    pub fn new(content: impl Into<String>, style: Style) -> Painted {
        Painted {
            content: content.into(),
            style,
        }
    }

    /// The painted text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The style covering the text
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Length of the content in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if there is no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Split into content and style.
    pub fn into_parts(self) -> (String, Style) {
        (self.content, self.style)
    }

    /// Add text at the end, inside the same style.
    ///
    /// The text is taken verbatim; escape sequences inside it are not interpreted.
    pub fn append(mut self, suffix: &str) -> Painted {
        self.content.push_str(suffix);
        self
    }

    /// Add text at the start, inside the same style.
    pub fn prepend(mut self, prefix: &str) -> Painted {
        self.content.insert_str(0, prefix);
        self
    }

    /// Replace the content with `template`, where every `%s` stands for the
    /// previous content.
    ///
    /// ```
    /// use brushwork::{AnsiColor, Background, Brush};
    ///
    /// let banana = Brush::new(AnsiColor::Yellow, Background::Default).paint(["banana"]);
    /// assert_eq!(banana.replace(r#"The name "%s", is funny"#).content(), r#"The name "banana", is funny"#);
    /// ```
    pub fn replace(mut self, template: &str) -> Painted {
        self.content = template.replace("%s", &self.content);
        self
    }

    /// Render with or without escape sequences.
    pub fn render(&self, config: &RenderConfig) -> String {
        if config.is_enabled() {
            let mut output = String::new();
            self.style.wrap_into(&mut output, &self.content);
            output
        } else {
            self.content.clone()
        }
    }

    /// Write the rendered text to `writer`.
    pub fn write_str<W: std::fmt::Write>(
        &self,
        writer: &mut W,
        config: &RenderConfig,
    ) -> std::fmt::Result {
        if config.is_enabled() {
            self.style.wrap(writer, &self.content)
        } else {
            writer.write_str(&self.content)
        }
    }
}

/// Always renders with escape sequences; use [`Painted::render`] to honor a
/// [`RenderConfig`].
impl std::fmt::Display for Painted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_str(f, &RenderConfig::enabled())
    }
}

/// Concatenate the plain content of every value, flattening nested styling.
pub(crate) fn concat_content<I, F>(values: I) -> String
where
    I: IntoIterator<Item = F>,
    F: Into<Fragment>,
{
    values
        .into_iter()
        .map(Into::<Fragment>::into)
        .fold(String::new(), |mut content, fragment| {
            content.push_str(fragment.content());
            content
        })
}

/// Join the plain content of every value with a space and end it with a newline.
pub(crate) fn concat_line<I, F>(values: I) -> String
where
    I: IntoIterator<Item = F>,
    F: Into<Fragment>,
{
    let mut content = values
        .into_iter()
        .map(|value| Into::<Fragment>::into(value).content().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    content.push('\n');
    content
}

/// Paint the concatenated content of `values` with one style.
///
/// Styled values contribute only their text.
///
/// ```
/// use brushwork::{paint, AnsiColor, Background, RenderConfig};
///
/// let love = paint(AnsiColor::Red, Background::Default, ["love"]);
/// assert_eq!(format!("I {love} go"), "I \x1b[31mlove\x1b[0m go");
/// ```
pub fn paint<C, I, F>(foreground: C, background: Background<C>, values: I) -> Painted
where
    C: ColorModel,
    I: IntoIterator<Item = F>,
    F: Into<Fragment>,
{
    Painted::new(concat_content(values), Style::new(&foreground, &background))
}

/// Like [`paint`], but joins the values with spaces and adds a trailing newline.
pub fn paintln<C, I, F>(foreground: C, background: Background<C>, values: I) -> Painted
where
    C: ColorModel,
    I: IntoIterator<Item = F>,
    F: Into<Fragment>,
{
    Painted::new(concat_line(values), Style::new(&foreground, &background))
}

/// Paint formatted text, typically called with `format_args!`.
pub fn paint_fmt<C: ColorModel>(
    foreground: C,
    background: Background<C>,
    args: std::fmt::Arguments<'_>,
) -> Painted {
    Painted::new(args.to_string(), Style::new(&foreground, &background))
}
