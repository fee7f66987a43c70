//! Control strip: render-ready list of buttons

use std::fmt;

use serde::Serialize;

use crate::config::PaginationConfig;
use crate::error::{PaginationError, Result};
use crate::navigation::{next_page, NavigationIntent};
use crate::state::PaginationState;
use crate::window::PageEntry;

/// A single button in the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Control {
    /// First/previous/next/last button
    Nav {
        intent: NavigationIntent,
        /// Page the button navigates to
        target: usize,
        /// Target equals the current page
        disabled: bool,
    },
    /// Numbered page button
    Page(PageEntry),
}

impl Control {
    /// Page the host should report when this control is activated
    pub fn target(&self) -> usize {
        match self {
            Control::Nav { target, .. } => *target,
            Control::Page(entry) => entry.page,
        }
    }
}

/// Ordered controls for one render
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlStrip {
    pub current_page: usize,
    pub page_count: usize,
    pub controls: Vec<Control>,
}

impl ControlStrip {
    /// Build the strip for `state`, omitting buttons hidden by `config`
    pub fn build(state: &PaginationState, config: &PaginationConfig) -> Result<Self> {
        let current_page = state.current_page();
        let page_count = state.page_count();
        let window = state.window()?;

        let nav = |intent: NavigationIntent| -> Result<Control> {
            let target = next_page(intent, current_page, page_count)?;
            Ok(Control::Nav {
                intent,
                target,
                disabled: target == current_page,
            })
        };

        let mut controls = Vec::with_capacity(window.len() + 4);

        if !config.hidden_first_page_button {
            controls.push(nav(NavigationIntent::First)?);
        }
        if !config.hidden_previous_page_button {
            controls.push(nav(NavigationIntent::Previous)?);
        }

        controls.extend(window.iter().copied().map(Control::Page));

        if !config.hidden_next_page_button {
            controls.push(nav(NavigationIntent::Next)?);
        }
        if !config.hidden_last_page_button {
            controls.push(nav(NavigationIntent::Last)?);
        }

        Ok(Self {
            current_page,
            page_count,
            controls,
        })
    }

    /// Numbered page buttons only
    pub fn page_entries(&self) -> impl Iterator<Item = &PageEntry> {
        self.controls.iter().filter_map(|c| match c {
            Control::Page(entry) => Some(entry),
            Control::Nav { .. } => None,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PaginationError::Serialization(e.to_string()))
    }
}

impl fmt::Display for ControlStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for control in &self.controls {
            if !first {
                f.write_str(" ")?;
            }
            first = false;

            match control {
                Control::Nav { intent, .. } => {
                    let glyph = match intent {
                        NavigationIntent::First => "«",
                        NavigationIntent::Previous => "‹",
                        NavigationIntent::Next => "›",
                        NavigationIntent::Last => "»",
                        NavigationIntent::SelectPage(_) => "?",
                    };
                    f.write_str(glyph)?;
                }
                Control::Page(entry) if entry.is_active => write!(f, "[{}]", entry.label)?,
                Control::Page(entry) => write!(f, "{}", entry.label)?,
            }
        }
        Ok(())
    }
}
