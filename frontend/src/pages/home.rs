use leads::Industry;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_dialog::{use_dialog_controller, ContactDialog, DialogController};
use crate::components::faq::FaqList;
use crate::components::sections::{CtaBanner, Hero, SECTION_STYLE};
use crate::content::{Faq, CITY_PAGES, INDUSTRY_PAGES, SERVICE_PAGES};
use crate::Route;

const HOME_FAQS: &[Faq] = &[
    Faq {
        question: "What kinds of businesses do you work with?",
        answer: "Local, owner-operated businesses: clinics, contractors, restaurants, law firms, garages and online stores.",
    },
    Faq {
        question: "What happens after I request a consultation?",
        answer: "A strategist reviews your website and local rankings, then calls you within one business day with a short plan.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let general = Industry::General;
    let dialog = use_dialog_controller(general.default_service());

    html! {
        <ContextProvider<DialogController> context={dialog}>
            <div class="landing-page">
                <Hero
                    headline="Marketing That Fills Your Calendar"
                    subhead="Search, ads and reviews for local businesses, managed by people who answer the phone."
                />

                <section class="page-section">
                    <h2>{"Industries We Serve"}</h2>
                    <div class="link-grid">
                        { for INDUSTRY_PAGES.iter().map(|page| html! {
                            <Link<Route> to={Route::Industry { slug: page.slug.to_string() }} classes="link-card">
                                <h3>{page.name}</h3>
                                <p>{page.subhead}</p>
                            </Link<Route>>
                        }) }
                    </div>
                </section>

                <section class="page-section">
                    <h2>{"Services"}</h2>
                    <div class="link-grid">
                        { for SERVICE_PAGES.iter().map(|page| html! {
                            <Link<Route> to={Route::Service { slug: page.slug.to_string() }} classes="link-card">
                                <h3>{page.name}</h3>
                                <p>{page.summary}</p>
                            </Link<Route>>
                        }) }
                    </div>
                </section>

                <section class="page-section">
                    <h2>{"Where We Work"}</h2>
                    <div class="link-grid">
                        { for CITY_PAGES.iter().map(|page| html! {
                            <Link<Route> to={Route::City { slug: page.slug.to_string() }} classes="link-card">
                                {format!("{}, {}", page.city, page.region)}
                            </Link<Route>>
                        }) }
                    </div>
                </section>

                <FaqList faqs={HOME_FAQS} />
                <CtaBanner
                    heading="Ready to Grow?"
                    text={AttrValue::from("Tell us about your business and we'll put together a free marketing plan.")}
                />
                <ContactDialog business_types={general.business_types()} />
                <style>{SECTION_STYLE}</style>
            </div>
        </ContextProvider<DialogController>>
    }
}
