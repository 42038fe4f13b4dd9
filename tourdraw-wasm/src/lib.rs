use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

/// Browser handle on an editing session. The editor is shared with pending
/// file reads, which finish after the call that started them returns.
#[wasm_bindgen]
pub struct TourEditor { pub(crate) inner: Rc<RefCell<tourdraw::Editor>> }

impl TourEditor {
    pub fn rs_new() -> TourEditor { TourEditor { inner: Rc::new(RefCell::new(tourdraw::Editor::new())) } }
    pub fn rs_geom_version(&self) -> u64 { self.inner.borrow().graph().geom_version() }
}
