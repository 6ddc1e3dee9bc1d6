use landing::InteractiveCounter;
use wasm_bindgen::UnwrapThrowExt;

pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    landing::mount(InteractiveCounter, "#interactive-counter").unwrap_throw();
}
