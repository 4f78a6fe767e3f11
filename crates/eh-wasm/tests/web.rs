#![cfg(target_arch = "wasm32")]

use eh_wasm::parse_filter_js;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn get(object: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(object, &key.into()).expect("property")
}

#[wasm_bindgen_test]
fn parses_css_property_filter() {
    let object = parse_filter_js("Example.com##div[-abp-properties='width:*']").expect("valid filter");
    assert_eq!(get(&object, "kind").as_string().as_deref(), Some("cssproperty"));
    assert_eq!(get(&object, "text").as_string().as_deref(), Some("example.com##div[-abp-properties='width:*']"));
    assert_eq!(get(&object, "regexpSource").as_string().as_deref(), Some("width:*"));
    assert_eq!(get(&object, "prefix").as_string().as_deref(), Some("div"));
}

#[wasm_bindgen_test]
fn rejects_request_filter() {
    assert!(parse_filter_js("||ads.example.com^").is_err());
}
