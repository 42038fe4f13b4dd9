use crate::interop::{new_obj, set_kv};
use tourdraw::TourError;
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

/// Envelope for a core error, with the offending parameter or id as data.
pub fn from_tour(e: &TourError) -> JsValue {
    let d = new_obj();
    let data = match e {
        TourError::TsplibLine { line, .. } => { set_kv(&d, "line", &JsValue::from_f64(*line as f64)); true }
        TourError::DuplicateId(id) | TourError::UnknownNode(id) | TourError::SelfLoop(id) => {
            set_kv(&d, "kind", &JsValue::from_str("node"));
            set_kv(&d, "id", &JsValue::from_str(id));
            true
        }
        TourError::UnknownEdge(id) => {
            set_kv(&d, "kind", &JsValue::from_str("edge"));
            set_kv(&d, "id", &JsValue::from_f64(*id as f64));
            true
        }
        TourError::NonFinite(param) => { set_kv(&d, "param", &JsValue::from_str(param)); true }
        TourError::OutOfRange { param, min, max, got } => {
            set_kv(&d, "param", &JsValue::from_str(param));
            set_kv(&d, "min", &JsValue::from_f64(*min));
            set_kv(&d, "max", &JsValue::from_f64(*max));
            set_kv(&d, "got", &JsValue::from_f64(*got));
            true
        }
        TourError::LimitExceeded { limit, .. } => { set_kv(&d, "limit", &JsValue::from_f64(*limit as f64)); true }
        TourError::MissingCoordSection | TourError::Json(_) | TourError::Busy => false,
    };
    err(e.code(), e.to_string(), data.then(|| d.into()))
}

pub fn result(r: Result<JsValue, TourError>) -> JsValue {
    match r {
        Ok(v) => ok(v),
        Err(e) => from_tour(&e),
    }
}

#[inline]
pub fn busy() -> JsValue { from_tour(&TourError::Busy) }

#[inline]
pub fn invalid_mode(got: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "got", &JsValue::from_str(got));
    err("invalid_mode", "mode must be 'cycle', 'path' or 'free'", Some(d.into()))
}
