use yew::prelude::*;

use crate::content::Faq;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub faqs: &'static [Faq],
    #[prop_or(AttrValue::from("Frequently Asked Questions"))]
    pub title: AttrValue,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    if props.faqs.is_empty() {
        return html! {};
    }

    html! {
        <section class="faq-section">
            <h2>{props.title.clone()}</h2>
            { for props.faqs.iter().map(|faq| html! {
                <FaqItem question={faq.question}>
                    <p>{faq.answer}</p>
                </FaqItem>
            }) }
            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .faq-section h2 {
                    font-size: 2.2rem;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .faq-item {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.2rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .faq-question:hover {
                    color: #7EB2FF;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: #7EB2FF;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }
                .faq-item.open .faq-answer {
                    max-height: 1000px;
                    padding: 0 1.5rem 1.5rem;
                }
                .faq-answer p {
                    color: #999;
                    line-height: 1.6;
                }
                @media (max-width: 768px) {
                    .faq-question {
                        font-size: 1.1rem;
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
