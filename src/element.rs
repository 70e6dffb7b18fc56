use std::sync::{Arc, PoisonError, RwLock};

/// Identifier of the page element that displays the action.
pub const RESULT_ELEMENT_ID: &str = "result";

/// Handle to the element that receives the rendered result.
///
/// Clones share the same text. Writers are not ordered: the last write wins.
#[derive(Debug, Default, Clone)]
pub struct ResultElement(Arc<RwLock<Option<String>>>);

impl ResultElement {
    /// Replaces the text content.
    pub fn replace_text(&self, text: String) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Some(text);
    }

    /// Current text content, `None` until the first write.
    pub fn text(&self) -> Option<String> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
