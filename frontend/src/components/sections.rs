use yew::prelude::*;

use crate::components::contact_dialog::{CtaButton, DialogController};
use crate::content::PricingTier;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub headline: AttrValue,
    pub subhead: AttrValue,
    #[prop_or(AttrValue::from("Get Your Free Consultation"))]
    pub cta_label: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero">
            <h1>{props.headline.clone()}</h1>
            <p class="hero-subhead">{props.subhead.clone()}</p>
            <CtaButton label={props.cta_label.clone()} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PricingCardProps {
    tier: &'static PricingTier,
}

#[function_component(PricingCard)]
fn pricing_card(props: &PricingCardProps) -> Html {
    let dialog = use_context::<DialogController>();
    let tier = props.tier;

    let onclick = match dialog {
        Some(dialog) => dialog.choose_callback(tier.service_label()),
        None => Callback::noop(),
    };

    html! {
        <div class={classes!("pricing-card", tier.popular.then_some("popular"))}>
            if tier.popular {
                <div class="popular-tag">{"Most Popular"}</div>
            }
            <h3>{tier.name}</h3>
            <div class="price">
                <span class="amount">{tier.price}</span>
                <span class="period">{tier.period}</span>
            </div>
            <p class="pricing-blurb">{tier.blurb}</p>
            <ul class="features-list">
                { for tier.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <button class="cta-button" {onclick}>{"Get Started"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingGridProps {
    pub tiers: &'static [PricingTier],
    #[prop_or(AttrValue::from("Simple, Transparent Pricing"))]
    pub title: AttrValue,
}

#[function_component(PricingGrid)]
pub fn pricing_grid(props: &PricingGridProps) -> Html {
    if props.tiers.is_empty() {
        return html! {};
    }

    html! {
        <section class="pricing-section">
            <h2>{props.title.clone()}</h2>
            <div class="pricing-grid">
                { for props.tiers.iter().map(|tier| html! { <PricingCard {tier} /> }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaBannerProps {
    pub heading: AttrValue,
    #[prop_or_default]
    pub text: Option<AttrValue>,
    #[prop_or(AttrValue::from("Schedule a Free Consultation"))]
    pub cta_label: AttrValue,
}

#[function_component(CtaBanner)]
pub fn cta_banner(props: &CtaBannerProps) -> Html {
    html! {
        <section class="cta-banner">
            <h2>{props.heading.clone()}</h2>
            if let Some(text) = props.text.clone() {
                <p>{text}</p>
            }
            <CtaButton label={props.cta_label.clone()} />
        </section>
    }
}

/// Styles shared by every landing page section.
pub const SECTION_STYLE: &str = r#"
.landing-page {
    background: #0d0f12;
    color: #fff;
    min-height: 100vh;
    padding-top: 74px;
}
.hero {
    text-align: center;
    padding: 6rem 2rem 4rem;
    max-width: 900px;
    margin: 0 auto;
}
.hero h1 {
    font-size: 3.2rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    margin-bottom: 1.5rem;
}
.hero-subhead {
    font-size: 1.2rem;
    color: #999;
    margin-bottom: 2rem;
}
.cta-button {
    background: linear-gradient(45deg, #1E90FF, #4169E1);
    color: #fff;
    border: none;
    border-radius: 8px;
    padding: 1rem 2rem;
    font-size: 1.1rem;
    cursor: pointer;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}
.cta-button:hover {
    transform: translateY(-2px);
    box-shadow: 0 4px 20px rgba(30, 144, 255, 0.3);
}
.pricing-section {
    padding: 4rem 2rem;
    text-align: center;
}
.pricing-section h2,
.cta-banner h2,
.page-section h2 {
    font-size: 2.2rem;
    margin-bottom: 2rem;
}
.pricing-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 2rem;
    max-width: 1000px;
    margin: 0 auto;
}
.pricing-card {
    position: relative;
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(30, 144, 255, 0.15);
    border-radius: 16px;
    padding: 2rem;
    text-align: left;
    display: flex;
    flex-direction: column;
}
.pricing-card.popular {
    border-color: #1E90FF;
}
.popular-tag {
    position: absolute;
    top: -0.8rem;
    right: 1.5rem;
    background: #1E90FF;
    border-radius: 999px;
    padding: 0.2rem 0.8rem;
    font-size: 0.8rem;
}
.price .amount {
    font-size: 2.4rem;
    font-weight: bold;
}
.price .period {
    color: #999;
}
.pricing-blurb {
    color: #999;
}
.features-list {
    list-style: none;
    padding: 0;
    margin: 1rem 0 2rem;
    flex: 1;
}
.features-list li {
    padding: 0.4rem 0;
    color: #ccc;
}
.features-list li::before {
    content: '✓ ';
    color: #1E90FF;
}
.cta-banner {
    text-align: center;
    padding: 4rem 2rem 6rem;
    background: linear-gradient(180deg, transparent, rgba(30, 144, 255, 0.08));
}
.cta-banner p {
    color: #999;
    margin-bottom: 2rem;
}
.page-section {
    max-width: 900px;
    margin: 0 auto;
    padding: 3rem 2rem;
}
.link-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 1rem;
}
.link-card {
    display: block;
    padding: 1.5rem;
    border-radius: 12px;
    border: 1px solid rgba(30, 144, 255, 0.15);
    color: #fff;
    text-decoration: none;
}
.link-card:hover {
    border-color: #1E90FF;
}
@media (max-width: 768px) {
    .hero h1 {
        font-size: 2.2rem;
    }
    .hero {
        padding: 4rem 1rem 3rem;
    }
}
"#;
