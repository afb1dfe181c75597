use leads::{Industry, DEFAULT_SERVICE_LABEL};
use yew::prelude::*;

use crate::components::contact_dialog::{use_dialog_controller, ContactDialog, CtaButton, DialogController};
use crate::components::sections::{CtaBanner, Hero, PricingGrid, SECTION_STYLE};
use crate::content;
use crate::pages::not_found::NotFound;

#[derive(Properties, PartialEq)]
pub struct ServicePageProps {
    pub slug: String,
}

#[function_component(ServiceLanding)]
pub fn service_landing(props: &ServicePageProps) -> Html {
    let page = content::service_page(&props.slug);
    let default_service = page
        .map(|p| format!("{} Consultation", p.name))
        .unwrap_or_else(|| DEFAULT_SERVICE_LABEL.to_string());
    let dialog = use_dialog_controller(&default_service);

    let Some(page) = page else {
        log::info!("No service page for slug {}", props.slug);
        return html! { <NotFound /> };
    };

    html! {
        <ContextProvider<DialogController> context={dialog}>
            <div class="landing-page">
                <Hero headline={page.headline} subhead={page.summary} cta_label={page.cta_label} />
                <section class="page-section">
                    <h2>{"What's Included"}</h2>
                    <ul class="features-list">
                        { for page.deliverables.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                    <CtaButton label={page.cta_label} class="cta-button secondary" />
                </section>
                <PricingGrid tiers={page.tiers} />
                <CtaBanner heading={format!("Start With a Free {} Review", page.name)} />
                <ContactDialog business_types={Industry::General.business_types()} />
                <style>{SECTION_STYLE}</style>
            </div>
        </ContextProvider<DialogController>>
    }
}
