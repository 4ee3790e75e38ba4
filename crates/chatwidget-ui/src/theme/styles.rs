//! Global CSS for the chat widget.
//!
//! Hosts inject this once via a `style` element. The configured theme
//! arrives as `--chat-theme` / `--chat-title-color` custom properties
//! set inline on the panel and launcher; every themed rule falls back
//! to the stylesheet accent when no theme color is configured.

pub const WIDGET_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ACCENT (header, send button, launcher) */
  --chat-accent: #4a90d9;
  --chat-accent-soft: rgba(74, 144, 217, 0.15);

  /* SURFACES */
  --chat-panel-bg: #ffffff;
  --chat-panel-border: #e0e0e0;
  --chat-bot-bubble: #f1f3f5;

  /* TEXT */
  --chat-text: #222222;
  --chat-text-muted: #777777;
  --chat-text-on-accent: #ffffff;

  /* Shape & Type */
  --chat-radius: 12px;
  --chat-font: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --chat-transition-fast: 150ms ease;
}

/* === Chat Panel === */
#chatbot {
  position: fixed;
  bottom: 90px;
  right: 20px;
  width: 320px;
  height: 480px;
  flex-direction: column;
  background: var(--chat-panel-bg);
  border: 1px solid var(--chat-panel-border);
  border-radius: var(--chat-radius);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.18);
  font-family: var(--chat-font);
  color: var(--chat-text);
  overflow: hidden;
  z-index: 1000;
}

/* === Header === */
#chatbot-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1rem;
  background: var(--chat-theme, var(--chat-accent));
  color: var(--chat-text-on-accent);
  flex-shrink: 0;
}

#chatbot-title {
  font-size: 1rem;
  font-weight: 600;
  color: var(--chat-title-color, #ffffff);
}

.header-actions {
  display: flex;
  align-items: center;
  gap: 0.25rem;
}

.header-actions button {
  background: transparent;
  border: none;
  color: var(--chat-text-on-accent);
  font-size: 0.9rem;
  line-height: 1;
  padding: 0.25rem;
  border-radius: 4px;
  cursor: pointer;
  transition: background var(--chat-transition-fast);
}

.header-actions button:hover {
  background: rgba(255, 255, 255, 0.2);
}

/* === Messages === */
#chatbot-messages {
  flex: 1;
  overflow-y: auto;
  padding: 0.75rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  scrollbar-width: thin;
  scrollbar-color: var(--chat-panel-border) transparent;
}

.scroll-anchor {
  height: 1px;
  flex-shrink: 0;
}

/* === Message Bubbles === */
.message {
  display: flex;
  max-width: 85%;
}

.message .text {
  padding: 0.5rem 0.75rem;
  border-radius: var(--chat-radius);
  font-size: 0.875rem;
  line-height: 1.4;
  white-space: pre-wrap;
  word-break: break-word;
}

.message.user {
  align-self: flex-end;
}

.message.user .text {
  background: var(--chat-theme, var(--chat-accent));
  color: var(--chat-text-on-accent);
  border-bottom-right-radius: 4px;
}

.message.bot {
  align-self: flex-start;
}

.message.bot .text {
  background: var(--chat-bot-bubble);
  color: var(--chat-text);
  border-bottom-left-radius: 4px;
}

/* === Suggestion Row === */
#suggested-messages {
  display: flex;
  gap: 0.5rem;
  padding: 0.5rem 0.75rem;
  overflow-x: auto;
  overflow-y: hidden;
  flex-shrink: 0;
  scrollbar-width: none;
}

#suggested-messages::-webkit-scrollbar {
  display: none;
}

.suggestion-btn {
  flex-shrink: 0;
  padding: 0.35rem 0.75rem;
  background: var(--chat-accent-soft);
  color: var(--chat-theme, var(--chat-accent));
  border: 1px solid var(--chat-theme, var(--chat-accent));
  border-radius: 999px;
  font-family: var(--chat-font);
  font-size: 0.8rem;
  white-space: nowrap;
  cursor: pointer;
  transition: filter var(--chat-transition-fast);
}

.suggestion-btn:hover {
  filter: brightness(0.92);
}

/* === Input Row === */
#chatbot-input {
  display: flex;
  gap: 0.5rem;
  padding: 0.75rem;
  border-top: 1px solid var(--chat-panel-border);
  flex-shrink: 0;
}

#user-input {
  flex: 1;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--chat-panel-border);
  border-radius: var(--chat-radius);
  font-family: var(--chat-font);
  font-size: 0.875rem;
  color: var(--chat-text);
  outline: none;
  transition: border-color var(--chat-transition-fast);
}

#user-input:focus {
  border-color: var(--chat-theme, var(--chat-accent));
}

#user-input::placeholder {
  color: var(--chat-text-muted);
}

#send-btn {
  padding: 0.5rem 1rem;
  background: var(--chat-theme, var(--chat-accent));
  color: var(--chat-text-on-accent);
  border: none;
  border-radius: var(--chat-radius);
  font-family: var(--chat-font);
  font-size: 0.875rem;
  cursor: pointer;
  transition: filter var(--chat-transition-fast);
}

#send-btn:hover {
  filter: brightness(0.92);
}

/* === Launcher === */
#chatbot-toggle {
  position: fixed;
  bottom: 20px;
  right: 20px;
  width: 56px;
  height: 56px;
  align-items: center;
  justify-content: center;
  background: var(--chat-theme, var(--chat-accent));
  border: none;
  border-radius: 50%;
  font-size: 1.5rem;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
  cursor: pointer;
  transition: transform var(--chat-transition-fast);
  z-index: 1000;
}

#chatbot-toggle:hover {
  transform: scale(1.05);
}
"#;
