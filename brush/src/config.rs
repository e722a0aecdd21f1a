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

use std::io::IsTerminal;
use tracing::debug;

/// Controls whether styled text is rendered with ANSI escape sequences.
///
/// `RenderConfig` is a plain value handed to a [`Renderer`](crate::Renderer). It
/// is meant to be built once during startup, usually with
/// [`RenderConfig::detect`], and passed along from there. Styled text keeps its
/// content and spans regardless of the configuration, so the same
/// [`StyledText`](crate::StyledText) can be rendered both ways.
///
/// # Presets
///
/// - [`RenderConfig::enabled`]: always wrap spans in SGR escapes
/// - [`RenderConfig::disabled`]: emit plain content only
/// - [`RenderConfig::detect`]: enabled when stdout is a terminal and `NO_COLOR`
///   is unset or empty
///
/// # Examples
///
/// ```
/// use brushwork::{AnsiColor, Background, Brush, RenderConfig};
///
/// let brush = Brush::new(AnsiColor::Red, Background::Default);
/// let painted = brush.paint(["love"]);
///
/// assert_eq!(painted.render(&RenderConfig::enabled()), "\x1b[31mlove\x1b[0m");
/// assert_eq!(painted.render(&RenderConfig::disabled()), "love");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    /// Wrap styled spans in SGR escape sequences
    pub enabled: bool,
}

impl RenderConfig {
    /// Render every styled span with escape sequences
    pub const fn enabled() -> RenderConfig {
        RenderConfig { enabled: true }
    }

    /// Render content only
    pub const fn disabled() -> RenderConfig {
        RenderConfig { enabled: false }
    }

    /// Probe the process environment.
    ///
    /// Rendering is enabled when standard output is attached to a terminal and
    /// the `NO_COLOR` environment variable is unset or empty.
    pub fn detect() -> RenderConfig {
        let is_terminal = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
        let config = RenderConfig::from_probe(is_terminal, no_color);
        debug!(is_terminal, no_color, enabled = config.enabled, "Probed render configuration");
        config
    }

    /// Build a configuration from already probed facts.
    pub const fn from_probe(is_terminal: bool, no_color: bool) -> RenderConfig {
        RenderConfig {
            enabled: is_terminal && !no_color,
        }
    }

    /// Set whether rendering is enabled
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Returns `true` if spans will be wrapped in escape sequences.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::detect()
    }
}
