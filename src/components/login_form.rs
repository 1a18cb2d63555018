use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::*;

/// Email/password form. Hands the raw field values to `on_submit`; the caller validates.
/// With `inline_errors` off there is no error element and messages are shown with `alert`.
#[component]
pub fn LoginForm(
    #[prop(into)] on_submit: Callback<(String, String)>,
    #[prop(into)] error: Signal<String>,
    #[prop(default = true)] inline_errors: bool,
) -> impl IntoView {
    let email_ref = create_node_ref::<Input>();
    let password_ref = create_node_ref::<Input>();

    if !inline_errors {
        create_effect(move |_| {
            let message = error.get();
            if !message.is_empty() {
                let _ = window().alert_with_message(&message);
            }
        });
    }

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let value = |node: NodeRef<Input>| node.get().map(|input| input.value()).unwrap_or_default();
        on_submit.call((value(email_ref), value(password_ref)));
    };

    view! {
        <form id="login-form" on:submit=handle_submit>
            <label for="email">{ "Email" }</label>
            <input type="email" id="email" name="email" autocomplete="username" node_ref=email_ref />
            <label for="password">{ "Password" }</label>
            <input type="password" id="password" name="password" autocomplete="current-password" node_ref=password_ref />
            {inline_errors.then(|| view! {
                <p id="login-error" class="error" role="alert">{ move || error.get() }</p>
            })}
            <button type="submit">{ "Login" }</button>
        </form>
    }
}
