//! Picker command: render the language switcher for a page.

use crate::i18n::{Language, LanguagePicker};
use anyhow::Result;

/// Print the picker as HTML, or its options as JSON.
pub fn run_picker(lang: Language, slug: &str, json: bool) -> Result<()> {
    let picker = LanguagePicker::new(lang, slug);
    if json {
        println!("{}", serde_json::to_string_pretty(&picker.options())?);
    } else {
        println!("{}", picker.render_html());
    }
    Ok(())
}
