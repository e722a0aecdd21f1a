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

use crate::{BrushResult, RenderConfig, StyledText};
use bytes::BufMut;
use tracing::trace;

/// Turns [`StyledText`] into output.
///
/// Rendering sweeps the content once from left to right. Gaps and verbatim
/// regions pass through unchanged, styled spans are wrapped as
/// `ESC[<params>m<slice>ESC[0m`. With rendering disabled the output is exactly
/// the content.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer using `config`.
    pub fn new(config: RenderConfig) -> Renderer {
        Renderer { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Number of bytes [`render`](Renderer::render) produces for `text`.
    pub fn rendered_len(&self, text: &StyledText) -> usize {
        if !self.config.is_enabled() {
            return text.len();
        }
        text.pieces()
            .map(|piece| match piece.style() {
                Some(style) => style.wrapped_len(piece.text().len()),
                None => piece.text().len(),
            })
            .sum()
    }

    /// Render `text` into a new string.
    pub fn render(&self, text: &StyledText) -> String {
        if !self.config.is_enabled() {
            return text.content().to_string();
        }
        let mut output = String::with_capacity(self.rendered_len(text));
        for piece in text.pieces() {
            match piece.style() {
                Some(style) => style.wrap_into(&mut output, piece.text()),
                None => output.push_str(piece.text()),
            }
        }
        trace!(
            content_len = text.len(),
            rendered_len = output.len(),
            "Rendered styled text"
        );
        output
    }

    /// Write rendered `text` to a formatting sink.
    pub fn write_str<W: std::fmt::Write>(&self, writer: &mut W, text: &StyledText) -> std::fmt::Result {
        if !self.config.is_enabled() {
            return writer.write_str(text.content());
        }
        for piece in text.pieces() {
            match piece.style() {
                Some(style) => style.wrap(writer, piece.text())?,
                None => writer.write_str(piece.text())?,
            }
        }
        Ok(())
    }

    /// Write rendered `text` to an I/O sink, returning the number of bytes written.
    pub fn write<W: std::io::Write>(&self, writer: &mut W, text: &StyledText) -> std::io::Result<usize> {
        if !self.config.is_enabled() {
            writer.write_all(text.content().as_bytes())?;
            return Ok(text.len());
        }
        let mut written = 0;
        for piece in text.pieces() {
            written += match piece.style() {
                Some(style) => style.write(writer, piece.text())?,
                None => {
                    writer.write_all(piece.text().as_bytes())?;
                    piece.text().len()
                }
            };
        }
        Ok(written)
    }

    /// Encode rendered `text` into a buffer, returning the number of bytes added.
    pub fn encode<T: BufMut>(&self, dst: &mut T, text: &StyledText) -> BrushResult<usize> {
        Ok(self.write(&mut dst.writer(), text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnsiColor, Background, Painted, Style};
    use bytes::BytesMut;

    fn sample() -> StyledText {
        let red = Style::new(&AnsiColor::Red, &Background::Default);
        let mut text = StyledText::plain("trash");
        text.append(Painted::new("red", red)).append("garbage");
        text
    }

    #[test]
    fn test_render_enabled() {
        let renderer = Renderer::new(RenderConfig::enabled());
        assert_eq!(renderer.render(&sample()), "trash\x1b[31mred\x1b[0mgarbage");
    }

    #[test]
    fn test_render_disabled_is_identity() {
        let renderer = Renderer::new(RenderConfig::disabled());
        assert_eq!(renderer.render(&sample()), "trashredgarbage");
        assert_eq!(renderer.rendered_len(&sample()), 15);
    }

    #[test]
    fn test_render_does_not_alter_text() {
        let text = sample();
        let before = text.clone();
        let _ = Renderer::new(RenderConfig::enabled()).render(&text);
        assert_eq!(text, before);
    }

    #[test]
    fn test_render_empty() {
        let renderer = Renderer::new(RenderConfig::enabled());
        assert_eq!(renderer.render(&StyledText::empty()), "");
        assert_eq!(renderer.rendered_len(&StyledText::empty()), 0);
    }

    #[test]
    fn test_render_verbatim_region() {
        let mut text = StyledText::empty();
        text.append_verbatim("as is");
        assert_eq!(Renderer::new(RenderConfig::enabled()).render(&text), "as is");
    }

    #[test]
    fn test_rendered_len_matches_render() {
        let renderer = Renderer::new(RenderConfig::enabled());
        let text = sample();
        assert_eq!(renderer.rendered_len(&text), renderer.render(&text).len());
    }

    #[test]
    fn test_sinks_agree() {
        let renderer = Renderer::new(RenderConfig::enabled());
        let text = sample();
        let expected = renderer.render(&text);

        let mut formatted = String::new();
        renderer.write_str(&mut formatted, &text).unwrap();
        assert_eq!(formatted, expected);

        let mut sink = Vec::new();
        let written = renderer.write(&mut sink, &text).unwrap();
        assert_eq!(sink, expected.as_bytes());
        assert_eq!(written, expected.len());

        let mut buffer = BytesMut::new();
        let encoded = renderer.encode(&mut buffer, &text).unwrap();
        assert_eq!(&buffer[..], expected.as_bytes());
        assert_eq!(encoded, expected.len());
    }

    #[test]
    fn test_disabled_sinks() {
        let renderer = Renderer::new(RenderConfig::disabled());
        let mut sink = Vec::new();
        assert_eq!(renderer.write(&mut sink, &sample()).unwrap(), 15);
        assert_eq!(sink, b"trashredgarbage");
    }
}
