use std::panic;
use leptos::logging::log;

/// Sets up a panic hook that reports to the browser console and adds the route
/// the panic happened on.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(move |panic_info| {
        // Keep the standard console report first
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        let route = web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| "<unknown>".to_string());
        log!("[PANIC] {} (route {})", message, route);

        if message.contains("OwnerDisposed") {
            log!("[PANIC] A reactive owner was used after its page was unmounted.");
            log!("[PANIC] Check async handlers that resume after navigation.");
        }
    }));
}

/// Call from the client entry points (hydrate / csr main).
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}
