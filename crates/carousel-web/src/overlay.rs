use carousel_core::hint_for_viewport;
use web_sys as web;

/// Refresh the navigation hint for the current viewport width.
pub fn update_hint(document: &web::Document, viewport_width: f64) {
    if let Some(el) = document.get_element_by_id("hint") {
        el.set_text_content(Some(hint_for_viewport(viewport_width)));
    }
}

/// Put the live item count back into the count field (after a rejected edit, or at startup).
pub fn show_count(input: &web::HtmlInputElement, count: usize) {
    input.set_value(&count.to_string());
}
