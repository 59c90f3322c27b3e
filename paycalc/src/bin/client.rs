#![allow(missing_docs)]

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = paycalc::mount() {
            web_sys::console::error_1(&e);
        }
    }
}
