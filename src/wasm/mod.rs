//! WASM bindings for the preview engine

use crate::layout::LayoutParams;
use crate::{render, PreviewEngine};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed preview wrapper
#[wasm_bindgen]
pub struct LetterheadPreview {
    engine: PreviewEngine,
}

#[wasm_bindgen]
impl LetterheadPreview {
    /// Create a preview with the default letterhead dimensions
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut engine = PreviewEngine::new(LayoutParams::default());
        engine.update_layout();

        Self { engine }
    }

    /// Create a preview with custom page dimensions
    #[wasm_bindgen(js_name = withParams)]
    pub fn with_params(chars_per_line: usize, max_lines_per_page: usize) -> Self {
        let mut engine = PreviewEngine::new(LayoutParams::new(chars_per_line, max_lines_per_page));
        engine.update_layout();

        Self { engine }
    }

    /// Replace the document text and repaginate
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: &str) {
        self.engine.set_text(text);
        self.engine.update_layout();
    }

    /// Get full document text
    #[wasm_bindgen(js_name = getText)]
    pub fn get_text(&self) -> String {
        self.engine.text()
    }

    /// Get page count
    #[wasm_bindgen(js_name = getPageCount)]
    pub fn get_page_count(&self) -> usize {
        self.engine.page_count()
    }

    /// Get the laid-out pages (returns JSON)
    #[wasm_bindgen(js_name = getPages)]
    pub fn get_pages(&self) -> JsValue {
        to_js(&self.engine.pages())
    }

    /// Get block render instructions for one page (returns JSON)
    #[wasm_bindgen(js_name = renderPage)]
    pub fn render_page(&self, page_index: usize) -> JsValue {
        match self.engine.pages().get(page_index) {
            Some(page) => to_js(&render::render_page(page)),
            None => JsValue::NULL,
        }
    }
}

impl Default for LetterheadPreview {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize through JSON for the JS bridge
fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_json::to_string(value)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok())
        .unwrap_or(JsValue::NULL)
}
