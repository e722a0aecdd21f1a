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

use crate::{BrushError, BrushResult, Painted, RenderConfig, Renderer, StyledText};
use bytes::BufMut;
use tokio_util::bytes::BytesMut;
use tokio_util::codec::Encoder;
use tracing::{instrument, trace};

/// Encodes styled text into a byte buffer.
///
/// `BrushCodec` plugs the [`Renderer`] into `tokio_util`'s framed I/O so styled
/// output can be written to any `FramedWrite` sink. Whether escape sequences
/// are emitted follows the codec's [`RenderConfig`].
#[derive(Copy, Clone, Debug, Default)]
pub struct BrushCodec {
    renderer: Renderer,
}

impl BrushCodec {
    /// Creates a new codec with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            renderer: Renderer::new(config),
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &RenderConfig {
        self.renderer.config()
    }

    /// Get a reference to the renderer
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

impl Encoder<&StyledText> for BrushCodec {
    type Error = BrushError;

    #[instrument(skip_all)]
    fn encode(&mut self, item: &StyledText, dst: &mut BytesMut) -> BrushResult<()> {
        dst.reserve(self.renderer.rendered_len(item));
        let written = self.renderer.encode(dst, item)?;
        trace!(written, "Encoded styled text");
        Ok(())
    }
}

impl Encoder<StyledText> for BrushCodec {
    type Error = BrushError;

    fn encode(&mut self, item: StyledText, dst: &mut BytesMut) -> BrushResult<()> {
        Encoder::<&StyledText>::encode(self, &item, dst)
    }
}

impl Encoder<&Painted> for BrushCodec {
    type Error = BrushError;

    #[instrument(skip_all)]
    fn encode(&mut self, item: &Painted, dst: &mut BytesMut) -> BrushResult<()> {
        if self.renderer.config().is_enabled() {
            item.style().encode(dst, item.content())?;
        } else {
            dst.put_slice(item.content().as_bytes());
        }
        Ok(())
    }
}

impl Encoder<&str> for BrushCodec {
    type Error = BrushError;

    fn encode(&mut self, item: &str, dst: &mut BytesMut) -> BrushResult<()> {
        dst.put_slice(item.as_bytes());
        Ok(())
    }
}
