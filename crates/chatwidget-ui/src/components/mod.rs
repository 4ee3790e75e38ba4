//! Chat widget components
//!
//! One component per region of the widget: launcher, header, message
//! list, suggestion row, input row, and the [`ChatWidget`] shell that
//! wires them together.

mod header;
mod launcher;
mod message_bubble;
mod message_input;
mod messages_list;
mod suggestions;
mod widget;

pub use header::WidgetHeader;
pub use launcher::LauncherButton;
pub use message_bubble::MessageBubble;
pub use message_input::MessageInput;
pub use messages_list::MessagesList;
pub use suggestions::SuggestionRow;
pub use widget::ChatWidget;
