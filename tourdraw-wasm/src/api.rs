use crate::TourEditor;
use crate::{error, interop};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use tourdraw::presets::Preset;
use tourdraw::{Editor, EditorConfig, Pick, TourMode};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console. `level` is one of
/// error/warn/info/debug/trace; anything else means info.
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) {
    let level = level
        .as_deref()
        .and_then(|l| l.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    set_panic_hook();
    log::info!("logging initialized at {}", level);
}

// Plain JS objects rather than Maps for anything map-shaped.
fn to_js<T: Serialize + ?Sized>(v: &T) -> JsValue {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

impl TourEditor {
    fn with<R>(&self, f: impl FnOnce(&Editor) -> R) -> Option<R> {
        self.inner.try_borrow().ok().map(|ed| f(&ed))
    }
    fn with_mut<R>(&self, f: impl FnOnce(&mut Editor) -> R) -> Option<R> {
        self.inner.try_borrow_mut().ok().map(|mut ed| f(&mut ed))
    }
}

fn loaded_summary(ed: &Editor, name: Option<String>) -> JsValue {
    let obj = interop::new_obj();
    let name = name.map_or(JsValue::NULL, |n| JsValue::from_str(&n));
    interop::set_kv(&obj, "name", &name);
    interop::set_kv(&obj, "nodes", &JsValue::from_f64(ed.graph().node_count() as f64));
    obj.into()
}

fn load_text(editor: &RefCell<Editor>, text: &str) -> JsValue {
    let Ok(mut ed) = editor.try_borrow_mut() else { return error::busy() };
    error::result(ed.load_tsplib(text).map(|name| loaded_summary(&ed, name)))
}

#[wasm_bindgen]
impl TourEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TourEditor {
        crate::TourEditor::rs_new()
    }
    pub fn geom_version(&self) -> u64 {
        self.rs_geom_version()
    }

    // Config
    pub fn get_config(&self) -> JsValue {
        self.with(|ed| to_js(ed.config())).unwrap_or(JsValue::NULL)
    }
    pub fn set_config_res(&self, v: JsValue) -> JsValue {
        let val = match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => val,
            Err(e) => return error::err("json_parse", format!("{}", e), None),
        };
        let cfg = match EditorConfig::from_json_value(val) {
            Ok(cfg) => cfg,
            Err(e) => return error::from_tour(&e),
        };
        self.with_mut(|ed| error::result(ed.set_config(cfg).map(|_| JsValue::TRUE)))
            .unwrap_or_else(error::busy)
    }
    pub fn set_mode(&self, mode: &str) -> bool {
        match TourMode::parse(mode) {
            Some(m) => self.with_mut(|ed| ed.set_mode(m)).is_some(),
            None => false,
        }
    }
    pub fn set_mode_res(&self, mode: &str) -> JsValue {
        let Some(m) = TourMode::parse(mode) else { return error::invalid_mode(mode) };
        self.with_mut(|ed| { ed.set_mode(m); error::ok(JsValue::TRUE) }).unwrap_or_else(error::busy)
    }

    // Nodes/Edges basic
    pub fn node_count(&self) -> u32 {
        self.with(|ed| ed.graph().node_count() as u32).unwrap_or(0)
    }
    pub fn edge_count(&self) -> u32 {
        self.with(|ed| ed.graph().edge_count() as u32).unwrap_or(0)
    }
    pub fn get_node(&self, id: &str) -> JsValue {
        match self.with(|ed| ed.graph().get_node(id)).flatten() {
            Some((x, y)) => to_js(&[x, y]),
            None => JsValue::NULL,
        }
    }
    pub fn get_node_res(&self, id: &str) -> JsValue {
        match self.with(|ed| ed.graph().get_node(id)) {
            Some(Some((x, y))) => error::ok(to_js(&[x, y])),
            Some(None) => error::from_tour(&tourdraw::TourError::UnknownNode(id.to_string())),
            None => error::busy(),
        }
    }
    pub fn pending_node(&self) -> Option<String> {
        self.with(|ed| ed.pending().map(str::to_string)).flatten()
    }

    // Typed arrays getters
    pub fn get_node_data(&self) -> JsValue {
        let Some((ids, pos)) = self.with(|ed| ed.graph().get_node_arrays()) else { return JsValue::NULL };
        let obj = interop::new_obj();
        interop::set_kv(&obj, "ids", &interop::arr_str(&ids).into());
        interop::set_kv(&obj, "positions", &interop::arr_f64(&pos).into());
        obj.into()
    }
    pub fn get_edge_data(&self) -> JsValue {
        let Some(ea) = self.with(|ed| ed.graph().get_edge_arrays()) else { return JsValue::NULL };
        let obj = interop::new_obj();
        interop::set_kv(&obj, "ids", &interop::arr_u32(&ea.ids).into());
        interop::set_kv(&obj, "endpoints", &interop::arr_u32(&ea.endpoints).into());
        obj.into()
    }

    // Clicks
    pub fn click_node(&self, id: &str) -> JsValue {
        match self.with_mut(|ed| ed.click_node(id)) {
            Some(Ok(out)) => to_js(&out),
            _ => JsValue::NULL,
        }
    }
    pub fn click_node_res(&self, id: &str) -> JsValue {
        self.with_mut(|ed| error::result(ed.click_node(id).map(|out| to_js(&out))))
            .unwrap_or_else(error::busy)
    }
    pub fn click_edge(&self, id: u32) -> bool {
        matches!(self.with_mut(|ed| ed.click_edge(id)), Some(Ok(_)))
    }
    pub fn click_edge_res(&self, id: u32) -> JsValue {
        self.with_mut(|ed| error::result(ed.click_edge(id).map(|out| to_js(&out))))
            .unwrap_or_else(error::busy)
    }
    pub fn click_at(&self, x: f64, y: f64) -> JsValue {
        match self.with_mut(|ed| ed.click_at(x, y)) {
            Some(Ok(Some(out))) => to_js(&out),
            _ => JsValue::NULL,
        }
    }
    pub fn click_at_res(&self, x: f64, y: f64) -> JsValue {
        if !x.is_finite() {
            return error::from_tour(&tourdraw::TourError::NonFinite("x"));
        }
        if !y.is_finite() {
            return error::from_tour(&tourdraw::TourError::NonFinite("y"));
        }
        self.with_mut(|ed| {
            error::result(ed.click_at(x, y).map(|out| out.map_or(JsValue::NULL, |o| to_js(&o))))
        })
        .unwrap_or_else(error::busy)
    }
    pub fn reset(&self) -> bool {
        self.with_mut(|ed| ed.reset()).is_some()
    }

    // Loading
    pub fn load_preset_res(&self, name: &str) -> JsValue {
        let Some(preset) = Preset::parse(name) else {
            let d = interop::new_obj();
            interop::set_kv(&d, "got", &JsValue::from_str(name));
            return error::err("invalid_preset", "preset must be 'pentagon' or 'burma14'", Some(d.into()));
        };
        self.with_mut(|ed| error::result(ed.load_preset(preset).map(|_| loaded_summary(ed, None))))
            .unwrap_or_else(error::busy)
    }
    pub fn load_tsplib(&self, text: &str) -> bool {
        matches!(self.with_mut(|ed| ed.load_tsplib(text)), Some(Ok(_)))
    }
    pub fn load_tsplib_res(&self, text: &str) -> JsValue {
        load_text(&self.inner, text)
    }
    /// Read a TSPLIB file picked by the user. `on_done` receives the same
    /// envelope `load_tsplib_res` returns once the read completes, or a
    /// `file_read` error if it fails or is aborted. The immediate return
    /// value only reports whether the read was started.
    pub fn load_file(&self, file: web_sys::File, on_done: &js_sys::Function) -> JsValue {
        let reader = match web_sys::FileReader::new() {
            Ok(r) => r,
            Err(e) => return error::err("file_read", format!("{:?}", e), None),
        };
        let editor = Rc::clone(&self.inner);
        let done = on_done.clone();
        let done_reader = reader.clone();
        // `loadend` fires once after load, error or abort.
        let onloadend = Closure::once_into_js(move |_ev: JsValue| {
            done_reader.set_onloadend(None);
            // `result` is null after an error or abort.
            let res = match done_reader.result().ok().and_then(|v| v.as_string()) {
                Some(text) => load_text(&editor, &text),
                None => {
                    log::warn!("file read failed or was aborted");
                    error::err("file_read", "could not read file", None)
                }
            };
            let _ = done.call1(&JsValue::NULL, &res);
        });
        reader.set_onloadend(Some(onloadend.unchecked_ref()));
        match reader.read_as_text(&file) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => {
                reader.set_onloadend(None);
                error::err("file_read", format!("{:?}", e), None)
            }
        }
    }

    // Picking + JSON + SVG
    pub fn pick(&self, x: f64, y: f64, tol: f64) -> JsValue {
        let Some(Some(p)) = self.with(|ed| ed.graph().pick(x, y, tol)) else { return JsValue::NULL };
        // Flatten to { kind: 'node'|'edge', ... }
        let obj = interop::new_obj();
        match p {
            Pick::Node { id, dist } => {
                interop::set_kv(&obj, "kind", &JsValue::from_str("node"));
                interop::set_kv(&obj, "id", &JsValue::from_str(&id));
                interop::set_kv(&obj, "dist", &JsValue::from_f64(dist));
            }
            Pick::Edge { id, t, dist } => {
                interop::set_kv(&obj, "kind", &JsValue::from_str("edge"));
                interop::set_kv(&obj, "id", &JsValue::from_f64(id as f64));
                interop::set_kv(&obj, "t", &JsValue::from_f64(t));
                interop::set_kv(&obj, "dist", &JsValue::from_f64(dist));
            }
        }
        obj.into()
    }
    pub fn pick_res(&self, x: f64, y: f64, tol: f64) -> JsValue {
        for (param, v) in [("x", x), ("y", y), ("tol", tol)] {
            if !v.is_finite() {
                return error::from_tour(&tourdraw::TourError::NonFinite(param));
            }
        }
        if tol < 0.0 {
            return error::from_tour(&tourdraw::TourError::OutOfRange {
                param: "tol",
                min: 0.0,
                max: f64::INFINITY,
                got: tol,
            });
        }
        error::ok(self.pick(x, y, tol))
    }
    pub fn to_json(&self) -> JsValue {
        self.with(|ed| to_js(&ed.graph().to_json_value())).unwrap_or(JsValue::NULL)
    }
    pub fn from_json_res(&self, v: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => self
                .with_mut(|ed| error::result(ed.load_json(val).map(|_| JsValue::TRUE)))
                .unwrap_or_else(error::busy),
            Err(e) => error::err("json_parse", format!("{}", e), None),
        }
    }
    pub fn to_svg_paths(&self) -> JsValue {
        self.with(|ed| to_js(&ed.graph().to_svg_paths())).unwrap_or(JsValue::NULL)
    }

    // Tour readout
    pub fn cost(&self) -> f64 {
        self.with(|ed| ed.cost()).unwrap_or(0.0)
    }
    /// Two-decimal cost, or undefined while the cost should be hidden.
    pub fn cost_label(&self) -> Option<String> {
        self.with(|ed| ed.cost_readout().display).flatten()
    }
    pub fn cost_readout(&self) -> JsValue {
        self.with(|ed| to_js(&ed.cost_readout())).unwrap_or(JsValue::NULL)
    }
    pub fn is_hamiltonian_cycle(&self) -> bool {
        self.with(|ed| tourdraw::algorithms::tour_check::is_hamiltonian_cycle(ed.graph())).unwrap_or(false)
    }
    pub fn is_hamiltonian_path(&self) -> bool {
        self.with(|ed| tourdraw::algorithms::tour_check::is_hamiltonian_path(ed.graph())).unwrap_or(false)
    }
    /// Node ids in visiting order when the edges form a cycle or path.
    pub fn tour_order(&self) -> JsValue {
        self.with(|ed| {
            let shape = ed.shape();
            let Some(order) = shape.order() else { return JsValue::NULL };
            let ids: Vec<String> = order
                .iter()
                .filter_map(|&slot| ed.graph().node_at(slot).map(|n| n.id.clone()))
                .collect();
            interop::arr_str(&ids).into()
        })
        .unwrap_or(JsValue::NULL)
    }
}
