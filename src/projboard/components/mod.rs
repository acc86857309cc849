//! # Board Components
//!
//! The board is made of three kinds of sections: the form
//! ([`ProjectInput`]), the two status lists ([`ProjectList`]) and the
//! entries inside them ([`ProjectItem`]). Each implements [`Component`].
//!
//! ## Lifecycle
//!
//! The composition root drives every component through the same steps, in
//! this order:
//!
//! 1. instantiate
//! 2. attach its element id to the [`Host`], at the start or the end
//! 3. [`Component::configure`]: wire it to the store (subscriptions)
//! 4. [`Component::render`]: produce its text
//!
//! Components render plain text. Colors are the terminal client's concern.

use crate::state::ProjectState;

pub mod project_input;
pub mod project_item;
pub mod project_list;

pub use project_input::ProjectInput;
pub use project_item::ProjectItem;
pub use project_list::ProjectList;

/// Width of a rendered board line, in terminal columns.
pub const LINE_WIDTH: usize = 72;

pub trait Component {
    fn element_id(&self) -> &str;

    fn configure(&mut self, state: &mut ProjectState);

    fn render(&self) -> String;
}

/// Ordered record of the elements attached to the board.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Host {
    elements: Vec<String>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, element_id: impl Into<String>, insert_at_start: bool) {
        let element_id = element_id.into();
        if insert_at_start {
            self.elements.insert(0, element_id);
        } else {
            self.elements.push(element_id);
        }
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }
}

/// Cuts `s` to at most `max_width` columns, ending with an ellipsis when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_at_start_goes_first() {
        let mut host = Host::new();
        host.attach("active-projects", false);
        host.attach("finished-projects", false);
        host.attach("user-input", true);

        assert_eq!(
            host.elements(),
            &["user-input", "active-projects", "finished-projects"]
        );
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn wide_chars_count_double() {
        // each CJK char is two columns wide
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }
}
