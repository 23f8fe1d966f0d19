//! Language picker rendered as a `<select>` element.
//!
//! The picker is stateless: it knows the current language and the slug of
//! the page being viewed, and every option points at the same slug under
//! another language prefix.

use super::Language;
use crate::utils::html::escape;
use serde::Serialize;
use std::fmt::Write;

/// Picker bound to the current language and content slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePicker {
    pub language: Language,
    pub slug: String,
}

/// One entry of the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOption {
    pub code: &'static str,
    pub label: &'static str,
    pub href: String,
    pub selected: bool,
}

impl LanguagePicker {
    pub fn new(language: Language, slug: impl Into<String>) -> Self {
        Self {
            language,
            slug: slug.into(),
        }
    }

    /// Navigation target when `lang` is chosen: `/{lang}/{slug}`.
    pub fn href(&self, lang: Language) -> String {
        format!("/{}/{}", lang.code(), self.slug.trim_start_matches('/'))
    }

    /// Current language first, then the others in declaration order.
    pub fn options(&self) -> Vec<PickerOption> {
        std::iter::once(self.language)
            .chain(Language::ALL.into_iter().filter(|&l| l != self.language))
            .map(|lang| PickerOption {
                code: lang.code(),
                label: lang.label(),
                href: self.href(lang),
                selected: lang == self.language,
            })
            .collect()
    }

    /// Render the picker as an HTML fragment.
    pub fn render_html(&self) -> String {
        let mut html = String::from(
            r#"<select class="language-picker" onchange="window.location.pathname = this.value">"#,
        );
        for option in self.options() {
            let selected = if option.selected { " selected" } else { "" };
            let _ = write!(
                html,
                r#"<option value="{}" lang="{}"{selected}>{}</option>"#,
                escape(&option.href),
                option.code,
                escape(option.label),
            );
        }
        html.push_str("</select>");
        html
    }
}
