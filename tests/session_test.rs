#![cfg(target_arch = "wasm32")]

use hbnb_web::config::SessionStrategy;
use hbnb_web::session::Session;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlDocument;

wasm_bindgen_test_configure!(run_in_browser);

fn cookie_jar() -> String {
    gloo_utils::document()
        .unchecked_into::<HtmlDocument>()
        .cookie()
        .unwrap()
}

fn stored_item(key: &str) -> Option<String> {
    gloo_utils::window()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item(key)
        .unwrap()
}

#[wasm_bindgen_test]
fn test_cookie_session_round_trip() {
    let session = Session::for_strategy(&SessionStrategy::default());
    session.logout().unwrap();
    assert!(!session.is_authenticated());

    session.set_token("abc def").unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("abc def"));
    // Written URL-encoded under the `token` name, readable from every path
    assert!(cookie_jar().split("; ").any(|pair| pair == "token=abc%20def"));

    session.logout().unwrap();
    assert!(!session.is_authenticated());
    assert!(!cookie_jar().contains("token=abc"));
}

#[wasm_bindgen_test]
fn test_local_storage_session_round_trip() {
    let session = Session::for_strategy(&"local".parse::<SessionStrategy>().unwrap());
    session.logout().unwrap();
    assert!(!session.is_authenticated());

    session.set_token("T").unwrap();
    assert!(session.is_authenticated());
    assert_eq!(stored_item("access_token").as_deref(), Some("T"));

    session.logout().unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(stored_item("access_token"), None);
}

#[wasm_bindgen_test]
fn test_stores_do_not_see_each_other() {
    let cookie = Session::for_strategy(&SessionStrategy::default());
    let local = Session::for_strategy(&"local".parse::<SessionStrategy>().unwrap());
    cookie.logout().unwrap();
    local.logout().unwrap();

    local.set_token("T").unwrap();
    assert!(!cookie.is_authenticated());

    local.logout().unwrap();
}
