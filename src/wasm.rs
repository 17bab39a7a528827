// WebAssembly bindings for a JavaScript input form
use crate::design;
use crate::form;
use crate::quantity;
use crate::report;
use serde_json::json;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ToroidWasm {}

impl Default for ToroidWasm {
    fn default() -> Self {
        Self::new()
    }
}

fn form_issues_json(validation: &form::FormValidation) -> serde_json::Value {
    let issues: Vec<_> = validation
        .issues
        .iter()
        .map(|issue| {
            json!({
                "field": issue.field,
                "input": issue.input,
                "error": issue.error.to_string(),
                "hint": issue.hint(),
            })
        })
        .collect();
    json!({ "ok": false, "issues": issues })
}

#[wasm_bindgen]
impl ToroidWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Validate one field value against its expected unit ("Hz", "m", "A", "V", "H" or "none")
    /// Returns the value in base SI units
    #[wasm_bindgen]
    pub fn validate_field(&self, text: &str, unit: &str, power: i32) -> Result<f64, JsValue> {
        let unit: quantity::UnitSymbol = unit
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        quantity::validate(text, unit, power).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Validate a whole form (JSON object keyed by field key) and compute the design
    /// Returns JSON: {"ok": true, "inputs": ..., "results": ...} or {"ok": false, "issues": [...]}
    #[wasm_bindgen]
    pub fn calculate(&self, fields_json: &str) -> Result<String, JsValue> {
        let values: form::FieldValues = serde_json::from_str(fields_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse fields JSON: {}", e)))?;

        let result = match form::validate_form(&values) {
            Ok(inputs) => {
                let results = design::compute(&inputs);
                json!({ "ok": true, "inputs": inputs, "results": results })
            }
            Err(validation) => form_issues_json(&validation),
        };

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Render the HTML report for a form, failing if any field is invalid
    #[wasm_bindgen]
    pub fn render_report(&self, fields_json: &str, core_name: &str) -> Result<String, JsValue> {
        let values: form::FieldValues = serde_json::from_str(fields_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse fields JSON: {}", e)))?;

        let inputs = form::validate_form(&values).map_err(|v| JsValue::from_str(&v.to_string()))?;
        let results = design::compute(&inputs);
        Ok(report::render_html(&report::DesignReport::new(
            core_name, &inputs, &results,
        )))
    }

    /// Field table as JSON: [{"key", "label", "group", "unit", "power"}, ...]
    #[wasm_bindgen]
    pub fn fields(&self) -> Result<String, JsValue> {
        let fields: Vec<_> = form::FIELDS
            .iter()
            .map(|spec| {
                json!({
                    "key": spec.key,
                    "label": spec.label,
                    "group": spec.group.to_string(),
                    "unit": spec.unit.symbol(),
                    "power": spec.power,
                })
            })
            .collect();

        serde_json::to_string(&fields)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize fields: {}", e)))
    }
}
