//! HTTP handlers for showbill-web

pub mod artists;
pub mod health;
pub mod pages;
pub mod shows;
pub mod venues;

use serde::Deserialize;

use crate::views::Flash;

/// Notice carried across a redirect as query parameters.
///
/// There is no session layer, so a flash that must survive a redirect
/// travels in the URL and is rendered by the target page.
#[derive(Debug, Deserialize, Default)]
pub struct NoticeQuery {
    pub notice: Option<String>,
    pub level: Option<String>,
}

impl NoticeQuery {
    /// Convert the query parameters into a flash banner, if present
    pub fn into_flash(self) -> Option<Flash> {
        let text = self.notice?;
        match self.level.as_deref() {
            Some("warning") => Some(Flash::warning(text)),
            _ => Some(Flash::info(text)),
        }
    }
}

/// Build a redirect target carrying a notice banner
pub fn redirect_with_notice(path: &str, flash: &Flash) -> String {
    let level = match flash.level {
        crate::views::FlashLevel::Warning => "warning",
        crate::views::FlashLevel::Info => "info",
    };
    format!(
        "{}?notice={}&level={}",
        path,
        crate::views::query_escape(&flash.text),
        level
    )
}

/// Shared form type for the name search boxes
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}
