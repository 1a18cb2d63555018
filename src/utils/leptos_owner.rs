/// Runs a closure under an owner captured earlier, typically before an `.await`.
/// If there is no owner, or it has been disposed since (the user navigated away),
/// logs and returns None.
pub fn with_owner_safe<F, R>(owner: Option<leptos::Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    let Some(owner) = owner else {
        leptos::logging::log!("[OWNER] No Leptos owner in context: {}", log_context);
        return None;
    };
    match leptos::try_with_owner(owner, f) {
        Ok(value) => Some(value),
        Err(err) => {
            leptos::logging::log!("[OWNER] Owner gone before {}: {:?}", log_context, err);
            None
        }
    }
}
