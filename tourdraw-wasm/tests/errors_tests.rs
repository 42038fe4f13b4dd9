use js_sys::Reflect;
use serde::Serialize;
use tourdraw_wasm::TourEditor;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

fn err_data(v: &JsValue, key: &str) -> JsValue {
    let err = Reflect::get(v, &JsValue::from_str("error")).unwrap();
    let data = Reflect::get(&err, &JsValue::from_str("data")).unwrap();
    Reflect::get(&data, &JsValue::from_str(key)).unwrap()
}

fn js(v: serde_json::Value) -> JsValue {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible()).unwrap()
}

#[wasm_bindgen_test]
fn invalid_ids_return_typed_errors() {
    let ed = TourEditor::new();
    ed.load_preset_res("pentagon");
    let ver = ed.geom_version();

    let r = ed.click_node_res("Z");
    assert!(is_err(&r, "invalid_id"));
    assert_eq!(err_data(&r, "id").as_string().as_deref(), Some("Z"));
    assert_eq!(ed.pending_node(), None);

    let r2 = ed.click_edge_res(42);
    assert!(is_err(&r2, "invalid_id"));
    assert_eq!(err_data(&r2, "kind").as_string().as_deref(), Some("edge"));
    assert!(is_err(&ed.get_node_res("Z"), "invalid_id"));
    assert_eq!(ed.geom_version(), ver, "state mutated on error");
}

#[wasm_bindgen_test]
fn unknown_node_keeps_armed_selection() {
    let ed = TourEditor::new();
    ed.load_preset_res("pentagon");
    ed.click_node("A");
    assert!(is_err(&ed.click_node_res("nope"), "invalid_id"));
    assert_eq!(ed.pending_node().as_deref(), Some("A"));
}

#[wasm_bindgen_test]
fn non_finite_and_out_of_range() {
    let ed = TourEditor::new();
    ed.load_preset_res("pentagon");
    let r = ed.click_at_res(f64::NAN, 0.0);
    assert!(is_err(&r, "non_finite"));
    assert_eq!(err_data(&r, "param").as_string().as_deref(), Some("x"));
    assert!(is_err(&ed.pick_res(0.0, f64::INFINITY, 1.0), "non_finite"));
    assert!(is_err(&ed.pick_res(0.0, 0.0, -1.0), "out_of_range"));

    let bad = ed.set_config_res(js(serde_json::json!({"pick_tolerance": -3.0})));
    assert!(is_err(&bad, "out_of_range"));
    assert_eq!(err_data(&bad, "param").as_string().as_deref(), Some("pick_tolerance"));
    let vp = ed.set_config_res(js(serde_json::json!({"viewport": {"width": 0.0}})));
    assert!(is_err(&vp, "out_of_range"));
}

#[wasm_bindgen_test]
fn tsplib_errors_keep_the_graph() {
    let ed = TourEditor::new();
    ed.load_preset_res("pentagon");
    ed.click_node("A");
    ed.click_node("B");
    let ver = ed.geom_version();

    assert!(is_err(&ed.load_tsplib_res("NAME: x\n1 0 0\nEOF\n"), "missing_section"));
    let line = ed.load_tsplib_res("NODE_COORD_SECTION\n1 0 0\n2 zero 0\nEOF\n");
    assert!(is_err(&line, "tsplib_line"));
    assert_eq!(err_data(&line, "line").as_f64(), Some(3.0));
    assert!(is_err(&ed.load_tsplib_res("NODE_COORD_SECTION\n1 0 0\n1 1 1\n"), "duplicate_id"));
    assert!(!ed.load_tsplib("no section here"));

    assert_eq!(ed.geom_version(), ver);
    assert_eq!(ed.node_count(), 5);
    assert_eq!(ed.edge_count(), 1);
}

#[wasm_bindgen_test]
fn load_reports_name_and_count() {
    let ed = TourEditor::new();
    let r = ed.load_tsplib_res("NAME: tiny\nNODE_COORD_SECTION\n1 0 0\n2 5 5\nEOF\n");
    let value = Reflect::get(&r, &JsValue::from_str("value")).unwrap();
    assert_eq!(Reflect::get(&value, &JsValue::from_str("name")).unwrap().as_string().as_deref(), Some("tiny"));
    assert_eq!(Reflect::get(&value, &JsValue::from_str("nodes")).unwrap().as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn modes_and_presets_are_checked() {
    let ed = TourEditor::new();
    let r = ed.set_mode_res("loop");
    assert!(is_err(&r, "invalid_mode"));
    assert_eq!(err_data(&r, "got").as_string().as_deref(), Some("loop"));
    assert!(is_err(&ed.load_preset_res("hexagon"), "invalid_preset"));
    assert_eq!(ed.node_count(), 0);
}

#[wasm_bindgen_test]
fn json_errors_are_atomic() {
    let ed = TourEditor::new();
    ed.load_preset_res("pentagon");
    ed.click_node("C");
    ed.click_node("D");
    let ver = ed.geom_version();

    let unknown = js(serde_json::json!({
        "nodes": [{"id": "a", "x": 0.0, "y": 0.0}],
        "edges": [{"source": "a", "target": "b"}]
    }));
    assert!(is_err(&ed.from_json_res(unknown), "invalid_id"));
    let self_loop = js(serde_json::json!({
        "nodes": [{"id": "a", "x": 0.0, "y": 0.0}],
        "edges": [{"source": "a", "target": "a"}]
    }));
    assert!(is_err(&ed.from_json_res(self_loop), "invalid_edge"));
    let wrong = js(serde_json::json!({"nodes": "none"}));
    assert!(is_err(&ed.from_json_res(wrong), "json_parse"));

    assert_eq!(ed.geom_version(), ver);
    assert_eq!(ed.node_count(), 5);
    assert_eq!(ed.edge_count(), 1);
}
