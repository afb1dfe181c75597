use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod api;
mod config;
mod content;
mod components {
    pub mod contact_dialog;
    pub mod faq;
    pub mod lead_form;
    pub mod sections;
}
mod pages {
    pub mod city;
    pub mod home;
    pub mod industry;
    pub mod not_found;
    pub mod service;
}

use pages::{
    city::CityLanding,
    home::Home,
    industry::IndustryLanding,
    not_found::NotFound,
    service::ServiceLanding,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/industries/:slug")]
    Industry { slug: String },
    #[at("/marketing/:slug")]
    City { slug: String },
    #[at("/services/:slug")]
    Service { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

// Keyed by slug so moving between pages of one kind starts a fresh dialog.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Industry { slug } => {
            info!("Rendering industry page {}", slug);
            html! { <IndustryLanding key={slug.clone()} slug={slug.clone()} /> }
        },
        Route::City { slug } => {
            info!("Rendering city page {}", slug);
            html! { <CityLanding key={slug.clone()} slug={slug.clone()} /> }
        },
        Route::Service { slug } => {
            info!("Rendering service page {}", slug);
            html! { <ServiceLanding key={slug.clone()} slug={slug.clone()} /> }
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let document = window.document();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .as_ref()
                        .and_then(|d| d.document_element())
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);
                if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    log::warn!("Could not watch scrolling: {:?}", e);
                }
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Brightpath Marketing"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for content::INDUSTRY_PAGES.iter().take(3).map(|page| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Industry { slug: page.slug.to_string() }} classes="nav-link">
                                {page.name}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Service { slug: "seo".to_string() }} classes="nav-link">
                            {"SEO"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>{NAV_STYLE}</style>
        </nav>
    }
}

const NAV_STYLE: &str = r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    padding: 1rem 2rem;
    transition: background 0.3s ease;
}
.top-nav.scrolled {
    background: rgba(13, 15, 18, 0.95);
    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
}
.nav-content {
    display: flex;
    justify-content: space-between;
    align-items: center;
    max-width: 1200px;
    margin: 0 auto;
}
.nav-logo {
    color: #fff;
    font-weight: bold;
    font-size: 1.3rem;
    text-decoration: none;
}
.nav-right {
    display: flex;
    gap: 1.5rem;
}
.nav-link {
    color: rgba(255, 255, 255, 0.8);
    text-decoration: none;
}
.nav-link:hover {
    color: #7EB2FF;
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    width: 24px;
    height: 2px;
    background: #fff;
}
@media (max-width: 768px) {
    .burger-menu {
        display: flex;
    }
    .nav-right {
        display: none;
    }
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        padding: 1rem 2rem;
        background: rgba(13, 15, 18, 0.98);
    }
}
"#;

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
