use dioxus::prelude::*;

use chatwidget_ui::theme::WIDGET_STYLES;
use chatwidget_ui::ChatWidget;

use crate::widget_config;

/// Styles for the stand-in host page. Widget styling lives in
/// [`WIDGET_STYLES`]; this only dresses the demo backdrop.
const DEMO_STYLES: &str = r#"
body {
  margin: 0;
  font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
  background: #f7f8fa;
  color: #222;
}

.demo-page {
  max-width: 32rem;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.demo-title {
  font-size: 1.5rem;
  margin-bottom: 0.75rem;
}

.demo-copy {
  line-height: 1.6;
  color: #555;
}
"#;

/// Root demo component.
///
/// Renders a minimal host page so the floating widget has something to
/// overlay, then mounts the widget itself.
#[component]
pub fn App() -> Element {
    let config = use_hook(widget_config);

    rsx! {
        style { {WIDGET_STYLES} }
        style { {DEMO_STYLES} }

        div { class: "demo-page",
            h1 { class: "demo-title", "Host page" }
            p { class: "demo-copy",
                "This page stands in for any site embedding the chat widget. "
                "Open the chat with the launcher in the corner."
            }
        }

        ChatWidget { config }
    }
}
