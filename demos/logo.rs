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

//! Rainbow Logo
//!
//! Draws the brushwork logo line by line. Capital letters and dots are the
//! strokes: dots turn into spaces and the strokes are painted with a dark
//! brush, while everything else picks up a rainbow color.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example logo
//! ```

use brushwork::{AnsiColor, Background, Brush, BrushResult, RenderConfig};
use regex::Regex;

const TITLE: [&str; 7] = [
    " brush brush brush brush brush brush brush brush ",
    "bruSH.BRush.BRUSh brUSh bRUsh BRUSh BRush.Brush",
    "rusH.brUSh BRusH.bruSH brUSh BRush bRUsh BRush ",
    "ush.BRUSh bRUSH.brusH.bruSH brUSH brUSH.BRUsh brush",
    "sh BRusH.brUSh BRush.BrusH.brush.BruSH brUSh brush",
    "h bRUSH.bruSH brUSh bRUSH.bruSH.BrusH.bruSH ",
    " brush brush brush brush brush brush brush brush",
];

fn main() -> BrushResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = RenderConfig::detect();
    let strokes = Brush::new(AnsiColor::BrightBlack, Background::Explicit(AnsiColor::Black));
    let pattern = Regex::new(r"[A-Z\.]")?;

    // Skip black, the rainbow runs from red to white
    for (line, color) in TITLE.iter().zip(&AnsiColor::ALL[1..8]) {
        let rainbow = Brush::new(color.to_bright(), Background::Explicit(*color));
        let logo = strokes.highlight_func(line, &pattern, |found| found.replace('.', " "));
        println!("{}", rainbow.embed([logo]).render(&config));
    }
    Ok(())
}
