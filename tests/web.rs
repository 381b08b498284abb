// Browser-only smoke test; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_game_mounts_the_menu() {
    naidi::start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    let root = doc.get_element_by_id("naidi-root").unwrap();
    let html = root.inner_html();
    assert!(html.contains("data-action=\"select\"") || html.contains("data-action='select'"));
}
