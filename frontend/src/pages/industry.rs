use leads::DEFAULT_SERVICE_LABEL;
use yew::prelude::*;

use crate::components::contact_dialog::{use_dialog_controller, ContactDialog, DialogController};
use crate::components::faq::FaqList;
use crate::components::sections::{CtaBanner, Hero, PricingGrid, SECTION_STYLE};
use crate::content;
use crate::pages::not_found::NotFound;

#[derive(Properties, PartialEq)]
pub struct IndustryPageProps {
    pub slug: String,
}

#[function_component(IndustryLanding)]
pub fn industry_landing(props: &IndustryPageProps) -> Html {
    let page = content::industry_page(&props.slug);
    // hooks run before any early return
    let dialog = use_dialog_controller(
        page.map(|p| p.industry.default_service())
            .unwrap_or(DEFAULT_SERVICE_LABEL),
    );

    let Some(page) = page else {
        log::info!("No industry page for slug {}", props.slug);
        return html! { <NotFound /> };
    };

    html! {
        <ContextProvider<DialogController> context={dialog}>
            <div class="landing-page">
                <Hero headline={page.headline} subhead={page.subhead} />
                <PricingGrid tiers={page.tiers} title={format!("Plans for {}", page.name)} />
                <FaqList faqs={page.faqs} />
                <CtaBanner
                    heading="Ready to Grow Your Business?"
                    cta_label="Book My Strategy Call"
                />
                <ContactDialog
                    business_types={page.industry.business_types()}
                    message_label={page.challenge_prompt}
                />
                <style>{SECTION_STYLE}</style>
            </div>
        </ContextProvider<DialogController>>
    }
}
