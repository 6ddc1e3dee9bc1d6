use wasm_bindgen::UnwrapThrowExt;

pub fn window() -> web_sys::Window {
    web_sys::window().expect_throw("expected window")
}

pub fn document() -> web_sys::Document {
    window().document().expect_throw("expected document")
}
