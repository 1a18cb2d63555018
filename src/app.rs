/// Main application entry point for HBnB.
/// Composes configuration, session storage and the API client, then picks one page per route.
use crate::api::{AuthApi, HttpAuthApi};
use crate::components::header::Header;
use crate::config::AppConfig;
use crate::pages::{
    add_review::AddReviewPage, listing::ListingPage, login::LoginPage, not_found::NotFound,
    place::PlacePage,
};
use crate::routes;
use crate::session::Session;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::rc::Rc;

/// Everything a page needs, handed down through Leptos context.
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub session: Session,
    pub auth: Rc<dyn AuthApi>,
    /// Mirrors `session.is_authenticated()`; refreshed on load, login and logout.
    pub authenticated: RwSignal<bool>,
}

/// Builds the context, registers it, and syncs the auth flag from storage once the
/// page runs in the browser. Must be called inside a reactive owner.
pub fn provide_app_context(config: AppConfig, session: Session, auth: Rc<dyn AuthApi>) -> AppContext {
    let ctx = AppContext {
        config: Rc::new(config),
        session,
        auth,
        authenticated: create_rw_signal(false),
    };

    let session = ctx.session.clone();
    let authenticated = ctx.authenticated;
    create_effect(move |_| authenticated.set(session.is_authenticated()));

    provide_context(ctx.clone());
    ctx
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    let session = Session::for_strategy(&config.session);
    let auth: Rc<dyn AuthApi> = Rc::new(HttpAuthApi::new(config.api_base.clone()));
    provide_app_context(config, session, auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/hbnb-web.css"/>
        <Title text="HBnB"/>
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path=routes::HOME view=ListingPage/>
                    <Route path=routes::LOGIN view=LoginPage/>
                    <Route path=routes::PLACE view=PlacePage/>
                    <Route path=routes::PLACE_REVIEW view=AddReviewPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}
