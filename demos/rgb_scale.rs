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

//! 256 Color Scale
//!
//! Builds a red to green scale from the 256 color cube and uses it to grade a
//! few made up percentages.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example rgb_scale
//! ```

use brushwork::{AnsiColor, Background, Brush, BrushResult, ExtendedColor, Fragment, Intensity, RenderConfig};

const PERCENTAGES: [(&str, usize); 4] = [("Cat", 65), ("Dog", 45), ("Parrot", 23), ("Ants", 1)];

fn main() -> BrushResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = RenderConfig::detect();
    let mut brush = Brush::new(AnsiColor::BrightWhite.to_extended(), Background::Default);

    let scale: Vec<ExtendedColor> = Intensity::ALL
        .iter()
        .map(|level| {
            let inverse = Intensity::ALL[Intensity::ALL.len() - 1 - usize::from(level.level())];
            ExtendedColor::rgb(*level, inverse, Intensity::Zero)
        })
        .collect();

    print!("scale: ");
    for (color, level) in scale.iter().zip(Intensity::ALL) {
        let percent = usize::from(level.level()) * 20;
        brush
            .use_bg_color(*color)
            .print_fmt(&config, format_args!(" {percent}% "))?;
    }
    brush.use_default_color();
    println!("\n");

    for (name, percent) in PERCENTAGES {
        let intensity = (scale.len() * percent / 100).min(scale.len() - 1);
        let grade = brush
            .use_font_color(scale[intensity])
            .paint([Fragment::display(&percent), Fragment::from("%")]);
        println!("{name} lovers:\t {}", grade.render(&config));
    }
    Ok(())
}
