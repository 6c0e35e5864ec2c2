// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Primer elemento existente entre varios IDs candidatos
pub fn first_element_by_ids<S: AsRef<str>>(ids: &[S]) -> Option<(String, Element)> {
    ids.iter()
        .find_map(|id| get_element_by_id(id.as_ref()).map(|el| (id.as_ref().to_string(), el)))
}

/// Ruta actual (`location.pathname`)
pub fn current_pathname() -> Option<String> {
    window()?.location().pathname().ok()
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// `style.display` del elemento
pub fn set_display(element: &Element, display: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property("display", display)
}

/// Mostrar (`block`) u ocultar (`none`)
pub fn set_visible(element: &Element, visible: bool) -> Result<(), JsValue> {
    set_display(element, if visible { "block" } else { "none" })
}
