//! Font icon markup (Glyphicons, Font Awesome, ...).

use std::borrow::Cow;
use std::sync::RwLock;

use crate::html::HtmlNode;

/// Fontset prefix used when [`icon`] is called without one.
static DEFAULT_FONTSET: RwLock<Cow<'static, str>> = RwLock::new(Cow::Borrowed("glyphicon"));

/// The current process-wide default fontset prefix.
pub fn default_fontset() -> String {
    match DEFAULT_FONTSET.read() {
        Ok(guard) => guard.to_string(),
        Err(poisoned) => poisoned.into_inner().to_string(),
    }
}

/// Replace the process-wide default fontset prefix.
pub fn set_default_fontset(fontset: impl Into<String>) {
    let mut guard = match DEFAULT_FONTSET.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = Cow::Owned(fontset.into());
}

/// `<i>` markup for one or more whitespace-separated icon names.
///
/// ```ignore
/// assert_eq!(icon("ok circle", Some("fa")), r#"<i class="fa fa-ok fa-circle"></i>"#);
/// ```
pub fn icon(name: &str, fontset: Option<&str>) -> String {
    let fontset = fontset.map_or_else(default_fontset, str::to_owned);
    let mut class = fontset.clone();
    for token in name.split_whitespace() {
        class.push(' ');
        class.push_str(&fontset);
        class.push('-');
        class.push_str(token);
    }
    HtmlNode::new("i").with_class(class).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_fontset() {
        assert_eq!(icon("ok circle", Some("fa")), r#"<i class="fa fa-ok fa-circle"></i>"#);
    }

    #[test]
    fn single_name() {
        assert_eq!(icon("user", Some("fa")), r#"<i class="fa fa-user"></i>"#);
    }

    #[test]
    fn extra_whitespace_ignored() {
        assert_eq!(icon("  spin   cog ", Some("fa")), r#"<i class="fa fa-spin fa-cog"></i>"#);
    }
}
