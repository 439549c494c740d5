// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Entry point for ujflasher
//!
//! Logs the process arguments, registers the sidebar buttons and
//! launches the GUI.

use clap::Parser;
use colored::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use ujflasher::config::{
    version_string, WindowConfig, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH, VERSION,
    VERSION_DATE,
};
use ujflasher::core::{Appearance, ButtonRegistry, ColorTheme};
use ujflasher::ui::App;

#[derive(Parser)]
#[command(name = "ujflasher")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Window title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Minimum window width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Minimum window height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Use the detected screen size for dimensions not given explicitly
    #[arg(long)]
    screen_size: bool,

    /// Light/dark appearance
    #[arg(long, value_enum, default_value_t = Appearance::Dark)]
    appearance: Appearance,

    /// Accent colour
    #[arg(long, value_enum, default_value_t = ColorTheme::Blue)]
    theme: ColorTheme,

    /// Extra arguments (logged only)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<String>,
}

impl Cli {
    /// Builds the window configuration from the parsed arguments
    fn window_config(&self) -> anyhow::Result<WindowConfig> {
        let (width, height) = if self.screen_size {
            (self.width, self.height)
        } else {
            (
                Some(self.width.unwrap_or(DEFAULT_WIDTH)),
                Some(self.height.unwrap_or(DEFAULT_HEIGHT)),
            )
        };

        Ok(WindowConfig::new(self.title.as_str())
            .with_min_size(width, height)
            .with_theme(self.appearance, self.theme)
            .with_footbar_text(version_string(VERSION, VERSION_DATE)?))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Application Launch");
    let code = run()?;
    info!("Application Exit ({})", code);

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Application run, returns the GTK exit code
fn run() -> anyhow::Result<i32> {
    info!("Application Start");

    let args: Vec<String> = std::env::args().skip(1).collect();
    info!("APP Number of Arguments: {}", args.len());
    info!("APP Arguments:");
    for arg in &args {
        info!("  {}", arg);
    }

    let cli = Cli::parse();
    if !cli.extra.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.extra);
    }
    let config = cli.window_config()?;

    let app = App::new(sidebar_buttons(), config)?;
    Ok(i32::from(app.run()))
}

/// Registers the sidebar buttons in display order
fn sidebar_buttons() -> ButtonRegistry {
    let mut registry = ButtonRegistry::new();

    registry.register("Device Info", || {
        println!("{}", "Showing Device Info Frame".cyan());
    });
    registry.register("Flash FW", || {
        println!("{}", "Showing FW Flash Frame".cyan());
    });
    registry.register("Debug", || {
        println!("{}", "Showing Debug Frame".cyan());
    });
    registry.register("About", || {
        println!("{}", "Showing About Frame".cyan());
    });

    registry
}
