//! Widget Configuration
//!
//! Static texts and per-theme styling, provided via Leptos context.

use leptos::prelude::*;

use crate::theme::Theme;

const LIGHT_BACKGROUND: &str =
    "https://th.bing.com/th/id/OIP.94sBHQEGxjQjTtrQPJNr4QHaEo?w=278&h=180&c=7&r=0&o=5&dpr=1.3&pid=1.7";
const DARK_BACKGROUND: &str =
    "https://th.bing.com/th/id/OIP.eYO54imCQa9tptRj_ojWUgHaEo?w=275&h=180&c=7&r=0&o=5&dpr=1.3&pid=1.7";

/// Styling for one theme
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStyle {
    pub background_url: &'static str,
    pub text_color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub title: &'static str,
    pub add_placeholder: &'static str,
    pub date_placeholder: &'static str,
    pub search_placeholder: &'static str,
    pub edit_prompt: &'static str,
    /// chrono format string for due dates
    pub due_date_format: &'static str,
    pub light: ThemeStyle,
    pub dark: ThemeStyle,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "TODO LIST",
            add_placeholder: "add item...",
            date_placeholder: "Select due date",
            search_placeholder: "Search...",
            edit_prompt: "Edit the item:",
            due_date_format: "%-m/%-d/%Y",
            light: ThemeStyle {
                background_url: LIGHT_BACKGROUND,
                text_color: "black",
            },
            dark: ThemeStyle {
                background_url: DARK_BACKGROUND,
                text_color: "white",
            },
        }
    }
}

impl WidgetConfig {
    pub fn style_for(&self, theme: Theme) -> &ThemeStyle {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    /// Inline style for the page container
    pub fn container_style(&self, theme: Theme) -> String {
        let style = self.style_for(theme);
        format!(
            "background-image: url('{}'); background-size: cover; min-height: 100vh; padding: 20px; color: {};",
            style.background_url, style.text_color
        )
    }
}

/// Get the widget config from context, falling back to defaults
pub fn use_config() -> WidgetConfig {
    use_context::<WidgetConfig>().unwrap_or_default()
}
