// Console logging helpers. Native builds (unit tests) have no console to talk to.

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    gloo::console::log!(msg);
}

#[cfg(target_arch = "wasm32")]
pub fn cwarn(msg: &str) {
    gloo::console::warn!(msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    let _ = msg;
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cwarn(msg: &str) {
    let _ = msg;
}
