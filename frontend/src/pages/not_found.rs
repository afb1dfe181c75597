use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::sections::SECTION_STYLE;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="landing-page">
            <section class="hero">
                <h1>{"Page Not Found"}</h1>
                <p class="hero-subhead">{"The page you were looking for has moved or never existed."}</p>
                <Link<Route> to={Route::Home} classes="cta-button">
                    {"Back to Home"}
                </Link<Route>>
            </section>
            <style>{SECTION_STYLE}</style>
        </div>
    }
}
