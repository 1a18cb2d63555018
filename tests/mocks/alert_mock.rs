use wasm_bindgen::prelude::*;

// Swaps `window.alert` for a recorder so tests can read what would have popped up.
#[wasm_bindgen(inline_js = r#"
export function install_alert_mock() {
    window.__alertMessages = [];
    window.alert = function(message) {
        console.log("[MOCK ALERT]", message);
        window.__alertMessages.push(String(message));
    };
    return true;
}

export function alert_mock_count() {
    return (window.__alertMessages || []).length;
}

export function alert_mock_last() {
    const messages = window.__alertMessages || [];
    return messages.length ? messages[messages.length - 1] : "";
}
"#)]
extern "C" {
    fn install_alert_mock() -> bool;
    fn alert_mock_count() -> u32;
    fn alert_mock_last() -> String;
}

pub fn setup_alert_mock() -> bool {
    install_alert_mock()
}

pub fn alert_count() -> u32 {
    alert_mock_count()
}

pub fn last_alert() -> String {
    alert_mock_last()
}
