//! Plan table bindings.

use inheritx_core::plans::{PlanListView, PlanTab};
use wasm_bindgen::prelude::*;

use crate::utils;

/// The all-plans table with its tab strip and search box.
#[wasm_bindgen]
pub struct WasmPlanListView {
    view: PlanListView,
}

impl Default for WasmPlanListView {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmPlanListView {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmPlanListView {
        Self {
            view: PlanListView::demo(),
        }
    }

    /// Tab labels in display order.
    pub fn tabs() -> Result<JsValue, JsValue> {
        let labels: Vec<&str> = PlanTab::ALL.iter().map(|t| t.label()).collect();
        utils::to_js(&labels)
    }

    pub fn tab(&self) -> String {
        self.view.tab().label().to_string()
    }

    /// Select a tab by label (case-insensitive).
    #[wasm_bindgen(js_name = setTab)]
    pub fn set_tab(&mut self, label: &str) -> Result<(), JsValue> {
        let tab = label.parse::<PlanTab>().map_err(utils::to_js_error)?;
        self.view.set_tab(tab);
        Ok(())
    }

    pub fn search(&self) -> String {
        self.view.search().to_string()
    }

    #[wasm_bindgen(js_name = setSearch)]
    pub fn set_search(&mut self, search: String) {
        self.view.set_search(search);
    }

    /// Rows to render, as plain objects with `transferDate` in display format.
    pub fn visible(&self) -> Result<JsValue, JsValue> {
        utils::to_js(&self.view.visible())
    }

    #[wasm_bindgen(js_name = isEmptyState)]
    pub fn is_empty_state(&self) -> bool {
        self.view.is_empty_state()
    }
}
