//! JavaScript bindings for the annotation renderer
//!
//! Annotations cross the boundary as JSON using the [`Tag`] mold:
//! `[{"start":1,"end":4,"mold":{"name":"a"}}]`.

use crate::annotation::{Annotation, Tag};
use crate::policy::{judge, Policy, PolicyOptions};
use crate::render::render;
use wasm_bindgen::prelude::*;

/// JavaScript-friendly wrapper around a rendering policy
#[wasm_bindgen]
pub struct WasmAnnotator {
    options: PolicyOptions,
    keep_longer: bool,
}

impl Default for WasmAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmAnnotator {
    /// Create an annotator with the default policy
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            options: PolicyOptions::default(),
            keep_longer: false,
        }
    }

    /// Create an annotator from a JSON policy document
    #[wasm_bindgen(js_name = fromPolicy)]
    pub fn from_policy(policy_json: String) -> Result<WasmAnnotator, JsValue> {
        let options =
            PolicyOptions::from_json(&policy_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            options,
            keep_longer: false,
        })
    }

    /// Resolve crossings by keeping the longer span instead of the first one
    #[wasm_bindgen(js_name = setKeepLonger)]
    pub fn set_keep_longer(&mut self, keep_longer: bool) {
        self.keep_longer = keep_longer;
    }

    /// Export the active options as JSON
    #[wasm_bindgen(js_name = policyJSON)]
    pub fn policy_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.options)
            .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
    }

    /// Render annotations (JSON list) over `text`
    #[wasm_bindgen(js_name = render)]
    pub fn render(&self, text: String, annotations_json: String) -> Result<String, JsValue> {
        let annotations: Vec<Annotation<Tag>> = serde_json::from_str(&annotations_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid annotations: {}", e)))?;

        let mut policy = Policy::with_options(self.options);
        if self.keep_longer {
            policy = policy.with_judge(judge::keep_longer);
        }

        render(&text, annotations, &policy).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
