//! WebAssembly bindings for the element hiding filter parser

use eh_core::{classify, parse_filter, ElemHideFilter};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn parse_filter_js(text: &str) -> Result<JsValue, JsValue> {
    let filter = parse_filter(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(filter_to_object(&filter).into())
}

#[wasm_bindgen]
pub fn classify_filter(text: &str) -> String {
    classify(text).as_str().to_string()
}

#[wasm_bindgen]
pub fn is_active_on_domain_js(text: &str, domain: &str) -> bool {
    parse_filter(text)
        .map(|filter| filter.is_active_on_domain(domain))
        .unwrap_or(false)
}

#[wasm_bindgen]
pub fn selector_domain_js(text: &str) -> Option<String> {
    parse_filter(text).ok().map(|filter| filter.selector_domain())
}

fn filter_to_object(filter: &ElemHideFilter) -> js_sys::Object {
    let result = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&result, &"kind".into(), &JsValue::from_str(filter.kind().as_str()));
    let _ = js_sys::Reflect::set(&result, &"text".into(), &JsValue::from_str(filter.text()));
    let _ = js_sys::Reflect::set(&result, &"selector".into(), &JsValue::from_str(filter.selector()));
    let _ = js_sys::Reflect::set(&result, &"selectorDomain".into(), &JsValue::from_str(&filter.selector_domain()));
    let _ = js_sys::Reflect::set(&result, &"exception".into(), &JsValue::from(filter.is_exception()));
    let _ = js_sys::Reflect::set(&result, &"generic".into(), &JsValue::from(filter.is_generic()));

    if let Some(css) = filter.css_property() {
        let _ = js_sys::Reflect::set(&result, &"regexp".into(), &JsValue::from_str(&css.regexp_pattern()));
        let _ = js_sys::Reflect::set(&result, &"regexpSource".into(), &JsValue::from_str(css.regexp_source()));
        let _ = js_sys::Reflect::set(&result, &"prefix".into(), &JsValue::from_str(css.selector_prefix()));
        let _ = js_sys::Reflect::set(&result, &"suffix".into(), &JsValue::from_str(css.selector_suffix()));
    }

    result
}
