use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use sanlilim_core::{NavState, SectionBounds};

use crate::common::*;

/// Header state: active section and mobile menu.
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmNav {
    inner: NavState,
}

#[wasm_bindgen]
impl WasmNav {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmNav { WasmNav::default() }

    /// Anchor of the active section, e.g. "shelter-finder".
    pub fn active(&self) -> String { self.inner.active().anchor().to_string() }

    pub fn is_earthquake_section(&self) -> bool { self.inner.is_earthquake_section() }

    pub fn menu_open(&self) -> bool { self.inner.menu_open() }

    pub fn toggle_menu(&mut self) { self.inner.toggle_menu() }

    /// Feed a scroll event with both sections' bounding rects (`{ top, bottom }`).
    /// Returns true if the active section changed.
    pub fn on_scroll(&mut self, frame: u64, shelter: JsValue, earthquake: JsValue) -> Result<bool, JsValue> {
        let shelter: SectionBounds = serde_wasm_bindgen::from_value(shelter).map_err(js_err)?;
        let earthquake: SectionBounds = serde_wasm_bindgen::from_value(earthquake).map_err(js_err)?;
        Ok(self.inner.on_scroll(frame, shelter, earthquake))
    }
}
