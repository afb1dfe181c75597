use leads::{Industry, DEFAULT_SERVICE_LABEL};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_dialog::{use_dialog_controller, ContactDialog, DialogController};
use crate::components::sections::{CtaBanner, Hero, SECTION_STYLE};
use crate::content::{self, INDUSTRY_PAGES};
use crate::pages::not_found::NotFound;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CityPageProps {
    pub slug: String,
}

#[function_component(CityLanding)]
pub fn city_landing(props: &CityPageProps) -> Html {
    let page = content::city_page(&props.slug);
    let default_service = page
        .map(|p| p.service_label())
        .unwrap_or_else(|| DEFAULT_SERVICE_LABEL.to_string());
    let dialog = use_dialog_controller(&default_service);

    let Some(page) = page else {
        log::info!("No city page for slug {}", props.slug);
        return html! { <NotFound /> };
    };

    html! {
        <ContextProvider<DialogController> context={dialog}>
            <div class="landing-page">
                <Hero
                    headline={format!("{} Marketing for Local Businesses", page.city)}
                    subhead={format!("Helping {}, {} businesses get found, get calls and get booked.", page.city, page.region)}
                />
                <section class="page-section">
                    <p class="hero-subhead">{page.blurb}</p>
                    <h2>{format!("Industries We Serve in {}", page.city)}</h2>
                    <div class="link-grid">
                        { for INDUSTRY_PAGES.iter().map(|industry| html! {
                            <Link<Route> to={Route::Industry { slug: industry.slug.to_string() }} classes="link-card">
                                {industry.name}
                            </Link<Route>>
                        }) }
                    </div>
                </section>
                <CtaBanner
                    heading={format!("Talk to a {} Marketing Strategist", page.city)}
                    cta_label="Get My Free Local Audit"
                />
                <ContactDialog business_types={Industry::General.business_types()} />
                <style>{SECTION_STYLE}</style>
            </div>
        </ContextProvider<DialogController>>
    }
}
