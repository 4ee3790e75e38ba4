#![allow(non_snake_case)]

mod app;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use chatwidget_core::WidgetConfig;

/// Widget configuration resolved from the command line, read by the
/// root component at mount.
static WIDGET_CONFIG: OnceLock<WidgetConfig> = OnceLock::new();

/// Get the resolved widget configuration.
pub fn widget_config() -> WidgetConfig {
    WIDGET_CONFIG.get().cloned().unwrap_or_default()
}

/// Chat widget demo host
#[derive(Parser, Debug)]
#[command(name = "chatwidget-desktop")]
#[command(about = "Demo page hosting the embeddable chat widget")]
struct Args {
    /// Path to a JSON widget configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the widget title
    #[arg(short, long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => match WidgetConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => demo_config(),
    };

    if let Some(title) = args.title {
        config.title = title;
    }

    tracing::info!("Starting chat widget demo titled '{}'", config.title);

    let _ = WIDGET_CONFIG.set(config);

    // Window size: roughly a phone-shaped host page
    let window_width = 480.0;
    let window_height = 760.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Chat Widget Demo")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

/// Built-in configuration used when no --config file is given.
fn demo_config() -> WidgetConfig {
    let bot_responses = HashMap::from([
        (
            "hello".to_string(),
            "Hey there! How can I help?".to_string(),
        ),
        (
            "what can you do?".to_string(),
            "I answer a fixed set of questions about this demo.".to_string(),
        ),
        ("bye".to_string(), "Goodbye! Come back any time.".to_string()),
    ]);

    WidgetConfig {
        title: "Chatbot".to_string(),
        initial_message: Some("Hi! Ask me something, or pick a suggestion below.".to_string()),
        bot_responses,
        suggested_messages: vec![
            "hello".to_string(),
            "what can you do?".to_string(),
            "bye".to_string(),
        ],
        theme_color: Some("#4a90d9".to_string()),
        title_color: "white".to_string(),
    }
}
