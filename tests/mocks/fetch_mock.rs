use wasm_bindgen::prelude::*;

// Replaces `window.fetch` with a canned responder so the login page can be
// driven end to end without a backend.
#[wasm_bindgen(inline_js = r#"
export function install_fetch_mock(status, status_text, body) {
    window.__fetchMockCalls = [];
    window.fetch = function(input, init) {
        const url = typeof input === "string" ? input : input.url;
        console.log("[MOCK FETCH]", url);
        window.__fetchMockCalls.push(url);
        return Promise.resolve(new Response(body, {
            status: status,
            statusText: status_text,
            headers: { "Content-Type": "application/json" }
        }));
    };
    return true;
}

export function fetch_mock_calls() {
    return (window.__fetchMockCalls || []).length;
}

export function last_fetched_url() {
    const calls = window.__fetchMockCalls || [];
    return calls.length ? calls[calls.length - 1] : "";
}
"#)]
extern "C" {
    fn install_fetch_mock(status: u16, status_text: &str, body: &str) -> bool;
    fn fetch_mock_calls() -> u32;
    fn last_fetched_url() -> String;
}

/// Installs a responder answering every request with `status` and `body`.
pub fn setup_fetch_mock(status: u16, status_text: &str, body: &str) -> bool {
    install_fetch_mock(status, status_text, body)
}

pub fn call_count() -> u32 {
    fetch_mock_calls()
}

pub fn last_url() -> String {
    last_fetched_url()
}
