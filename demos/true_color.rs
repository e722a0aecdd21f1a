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

//! True Color Check
//!
//! Prints a line in 24-bit color to check terminal support.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example true_color
//! ```

use brushwork::{Background, Brush, BrushResult, RenderConfig, TrueColor};

fn main() -> BrushResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let pinkish = TrueColor::new(255, 82, 197);
    let brownish: TrueColor = "#9B6A00".parse()?;
    let test = Brush::new(pinkish, Background::Explicit(brownish));

    test.print(&RenderConfig::detect(), ["Can you see this (correctly) ?"])?;
    println!("\nIf not, probably your terminal does not support true colors");
    Ok(())
}
