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

use crate::{BrushError, BrushResult};

/// A color value that knows its own SGR parameters.
///
/// Implementors return only the color specific part of a Select Graphic Rendition
/// parameter list, without the `ESC[` prefix or the `m` terminator. The styling
/// core treats the two strings as opaque.
///
/// | Type              | Foreground     | Background     |
/// |-------------------|----------------|----------------|
/// | [`AnsiColor`]     | `30`-`37`, `90`-`97` | `40`-`47`, `100`-`107` |
/// | [`ExtendedColor`] | `38;5;n`       | `48;5;n`       |
/// | [`TrueColor`]     | `38;2;r;g;b`   | `48;2;r;g;b`   |
pub trait ColorModel {
    /// SGR parameters selecting this color as the foreground.
    fn foreground_code(&self) -> String;

    /// SGR parameters selecting this color as the background.
    fn background_code(&self) -> String;
}

/// One of the 16 colors of the basic ANSI palette.
///
/// The first eight are the standard colors, the last eight their bright
/// (aixterm) variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum AnsiColor {
    /// Black - Color #0 (FG `30`, BG `40`).
    Black,
    /// Red - Color #1 (FG `31`, BG `41`).
    Red,
    /// Green - Color #2 (FG `32`, BG `42`).
    Green,
    /// Yellow - Color #3 (FG `33`, BG `43`).
    Yellow,
    /// Blue - Color #4 (FG `34`, BG `44`).
    Blue,
    /// Magenta - Color #5 (FG `35`, BG `45`).
    Magenta,
    /// Cyan - Color #6 (FG `36`, BG `46`).
    Cyan,
    /// White - Color #7 (FG `37`, BG `47`).
    White,
    /// Bright Black - Color #8 (FG `90`, BG `100`).
    BrightBlack,
    /// Bright Red - Color #9 (FG `91`, BG `101`).
    BrightRed,
    /// Bright Green - Color #10 (FG `92`, BG `102`).
    BrightGreen,
    /// Bright Yellow - Color #11 (FG `93`, BG `103`).
    BrightYellow,
    /// Bright Blue - Color #12 (FG `94`, BG `104`).
    BrightBlue,
    /// Bright Magenta - Color #13 (FG `95`, BG `105`).
    BrightMagenta,
    /// Bright Cyan - Color #14 (FG `96`, BG `106`).
    BrightCyan,
    /// Bright White - Color #15 (FG `97`, BG `107`).
    BrightWhite,
}

impl AnsiColor {
    /// Every palette color in index order.
    pub const ALL: [AnsiColor; 16] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
        AnsiColor::BrightBlack,
        AnsiColor::BrightRed,
        AnsiColor::BrightGreen,
        AnsiColor::BrightYellow,
        AnsiColor::BrightBlue,
        AnsiColor::BrightMagenta,
        AnsiColor::BrightCyan,
        AnsiColor::BrightWhite,
    ];

    /// Palette index of this color (0-15).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a palette color by index, `None` above 15.
    pub fn from_index(index: u8) -> Option<AnsiColor> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Returns `true` for the eight bright variants.
    pub fn is_bright(self) -> bool {
        self.index() >= 8
    }

    /// The bright variant of a standard color. Bright colors map to themselves.
    pub fn to_bright(self) -> AnsiColor {
        Self::ALL[usize::from(self.index() | 8)]
    }

    /// The same color addressed through the 256 color palette.
    pub fn to_extended(self) -> ExtendedColor {
        ExtendedColor(self.index())
    }

    /// The conventional RGB value of this palette entry.
    pub fn to_true_color(self) -> TrueColor {
        match self {
            AnsiColor::Black => TrueColor::new(0, 0, 0),
            AnsiColor::Red => TrueColor::new(128, 0, 0),
            AnsiColor::Green => TrueColor::new(0, 128, 0),
            AnsiColor::Yellow => TrueColor::new(128, 128, 0),
            AnsiColor::Blue => TrueColor::new(0, 0, 128),
            AnsiColor::Magenta => TrueColor::new(128, 0, 128),
            AnsiColor::Cyan => TrueColor::new(0, 128, 128),
            AnsiColor::White => TrueColor::new(192, 192, 192),
            AnsiColor::BrightBlack => TrueColor::new(128, 128, 128),
            AnsiColor::BrightRed => TrueColor::new(255, 0, 0),
            AnsiColor::BrightGreen => TrueColor::new(0, 255, 0),
            AnsiColor::BrightYellow => TrueColor::new(255, 255, 0),
            AnsiColor::BrightBlue => TrueColor::new(0, 0, 255),
            AnsiColor::BrightMagenta => TrueColor::new(255, 0, 255),
            AnsiColor::BrightCyan => TrueColor::new(0, 255, 255),
            AnsiColor::BrightWhite => TrueColor::new(255, 255, 255),
        }
    }
}

impl ColorModel for AnsiColor {
    fn foreground_code(&self) -> String {
        let index = self.index();
        if index < 8 {
            (30 + index).to_string()
        } else {
            (82 + index).to_string()
        }
    }

    fn background_code(&self) -> String {
        let index = self.index();
        if index < 8 {
            (40 + index).to_string()
        } else {
            (92 + index).to_string()
        }
    }
}

/// Level of a primary color inside the 6x6x6 cube of the 256 color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Intensity {
    /// Level 0, channel value 0
    Zero,
    /// Level 1, channel value 95
    Low,
    /// Level 2, channel value 135
    Moderate,
    /// Level 3, channel value 175
    Medium,
    /// Level 4, channel value 215
    High,
    /// Level 5, channel value 255
    Max,
}

impl Intensity {
    /// Every level from darkest to brightest.
    pub const ALL: [Intensity; 6] = [
        Intensity::Zero,
        Intensity::Low,
        Intensity::Moderate,
        Intensity::Medium,
        Intensity::High,
        Intensity::Max,
    ];

    const CHANNEL: [u8; 6] = [0, 95, 135, 175, 215, 255];

    /// Cube coordinate of this level (0-5).
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Look up a level by cube coordinate, `None` above 5.
    pub fn from_level(level: u8) -> Option<Intensity> {
        Self::ALL.get(usize::from(level)).copied()
    }

    /// The 8-bit channel value this level stands for.
    pub fn channel(self) -> u8 {
        Self::CHANNEL[usize::from(self.level())]
    }
}

/// A color number from 0 to 255, for use in 256-color terminal environments.
///
/// - Colours 0 to 15 are the [`AnsiColor`] palette.
/// - Colours 16 to 231 form a 6x6x6 RGB cube, see [`ExtendedColor::rgb`].
/// - Colours 232 to 255 are shades of gray, see [`ExtendedColor::gray_scale`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct ExtendedColor(pub u8);

impl ExtendedColor {
    /// Highest level accepted by [`ExtendedColor::gray_scale`].
    pub const MAX_GRAY_SCALE: u8 = 25;

    /// Pick a color from the RGB cube by mixing three intensity levels.
    ///
    /// ```
    /// use brushwork::{ExtendedColor, Intensity};
    ///
    /// let pink = ExtendedColor::rgb(Intensity::Max, Intensity::Medium, Intensity::High);
    /// assert_eq!(pink, ExtendedColor(218));
    /// ```
    pub fn rgb(red: Intensity, green: Intensity, blue: Intensity) -> ExtendedColor {
        ExtendedColor(16 + 36 * red.level() + 6 * green.level() + blue.level())
    }

    /// Pick a shade from the gray ramp.
    ///
    /// Level 0 is black and [`ExtendedColor::MAX_GRAY_SCALE`] is bright white;
    /// levels 1 to 24 walk the dedicated ramp. Larger levels saturate to white.
    pub fn gray_scale(level: u8) -> ExtendedColor {
        match level {
            0 => AnsiColor::Black.to_extended(),
            Self::MAX_GRAY_SCALE.. => AnsiColor::BrightWhite.to_extended(),
            _ => ExtendedColor(231 + level),
        }
    }

    /// The RGB value xterm uses for this palette entry.
    pub fn to_true_color(self) -> TrueColor {
        match self.0 {
            index @ 0..=15 => AnsiColor::ALL[usize::from(index)].to_true_color(),
            index @ 16..=231 => {
                let cube = index - 16;
                TrueColor::new(
                    Intensity::CHANNEL[usize::from(cube / 36)],
                    Intensity::CHANNEL[usize::from(cube / 6 % 6)],
                    Intensity::CHANNEL[usize::from(cube % 6)],
                )
            }
            index => {
                let gray = 8 + 10 * (index - 232);
                TrueColor::new(gray, gray, gray)
            }
        }
    }
}

impl From<AnsiColor> for ExtendedColor {
    fn from(color: AnsiColor) -> Self {
        color.to_extended()
    }
}

impl ColorModel for ExtendedColor {
    fn foreground_code(&self) -> String {
        format!("38;5;{}", self.0)
    }

    fn background_code(&self) -> String {
        format!("48;5;{}", self.0)
    }
}

/// A 24-bit RGB color, as specified by ISO-8613-3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct TrueColor {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl TrueColor {
    /// Create a color from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> TrueColor {
        TrueColor { red, green, blue }
    }

    /// Parse a `#RRGGBB` or `#RGB` literal. The `#` prefix is optional and the
    /// shorthand form doubles each digit, so `F00` is `FF0000`.
    ///
    /// ```
    /// use brushwork::TrueColor;
    ///
    /// assert_eq!(TrueColor::parse_hex("#FFA500").unwrap(), TrueColor::new(255, 165, 0));
    /// assert_eq!(TrueColor::parse_hex("F00").unwrap(), TrueColor::new(255, 0, 0));
    /// assert!(TrueColor::parse_hex("blue").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`BrushError::InvalidHexLength`] when the literal does not hold 3 or 6
    /// digits, [`BrushError::InvalidHexDigit`] naming the first character that
    /// is not a hex digit.
    pub fn parse_hex(input: &str) -> BrushResult<TrueColor> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let count = digits.chars().count();
        if count != 3 && count != 6 {
            return Err(BrushError::InvalidHexLength {
                input: input.to_string(),
            });
        }

        let nibbles = digits
            .chars()
            .map(|ch| match ch.to_digit(16) {
                Some(value) => Ok(value as u8),
                None => Err(BrushError::InvalidHexDigit {
                    input: input.to_string(),
                    token: ch.to_string(),
                }),
            })
            .collect::<BrushResult<Vec<u8>>>()?;

        let channels = match nibbles.as_slice() {
            [r, g, b] => [r * 17, g * 17, b * 17],
            [r1, r2, g1, g2, b1, b2] => [r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2],
            _ => unreachable!("length checked above"),
        };
        Ok(TrueColor::new(channels[0], channels[1], channels[2]))
    }
}

impl std::str::FromStr for TrueColor {
    type Err = BrushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrueColor::parse_hex(s)
    }
}

impl std::fmt::Display for TrueColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl From<AnsiColor> for TrueColor {
    fn from(color: AnsiColor) -> Self {
        color.to_true_color()
    }
}

impl From<ExtendedColor> for TrueColor {
    fn from(color: ExtendedColor) -> Self {
        color.to_true_color()
    }
}

impl ColorModel for TrueColor {
    fn foreground_code(&self) -> String {
        format!("38;2;{};{};{}", self.red, self.green, self.blue)
    }

    fn background_code(&self) -> String {
        format!("48;2;{};{};{}", self.red, self.green, self.blue)
    }
}

/// Background selection for a style.
///
/// `Default` leaves the terminal's own background alone; no background
/// parameter is emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Background<C> {
    /// Keep the terminal background
    Default,
    /// Paint with the given color
    Explicit(C),
}

impl<C> Background<C> {
    /// Returns `true` when no explicit background is selected.
    pub fn is_default(&self) -> bool {
        matches!(self, Background::Default)
    }

    /// The explicit color, if any.
    pub fn as_explicit(&self) -> Option<&C> {
        match self {
            Background::Default => None,
            Background::Explicit(color) => Some(color),
        }
    }

    /// The explicit color, or `fallback` when none is selected.
    pub fn or(self, fallback: C) -> C {
        match self {
            Background::Default => fallback,
            Background::Explicit(color) => color,
        }
    }
}

impl<C> Default for Background<C> {
    fn default() -> Self {
        Background::Default
    }
}

impl<C> From<C> for Background<C> {
    fn from(color: C) -> Self {
        Background::Explicit(color)
    }
}
