// VIEW: style and class writes to the document
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::model::swatch::FINISHES;

/// Best-effort inline style write. Elements without a style surface are
/// silently skipped.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Swap the device finish class, clearing whichever finish was applied before.
pub fn set_finish(el: &Element, finish: &str) {
    let classes = el.class_list();
    for known in FINISHES {
        let _ = classes.remove_1(known);
    }
    let _ = classes.add_1(finish);
}
