use std::rc::Rc;

use leads::{BusinessType, DialogAction, DialogState};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::lead_form::LeadForm;

#[derive(Debug, Clone, PartialEq)]
pub struct DialogModel(DialogState);

impl Reducible for DialogModel {
    type Action = DialogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

/// Page-scoped handle every CTA on a page uses to drive the one contact dialog.
///
/// Built once per page with [`use_dialog_controller`] and handed down through a
/// `ContextProvider<DialogController>`.
#[derive(Clone, PartialEq)]
pub struct DialogController {
    handle: UseReducerHandle<DialogModel>,
}

impl DialogController {
    pub fn is_open(&self) -> bool {
        self.handle.0.is_open()
    }

    pub fn selected_service(&self) -> String {
        self.handle.0.selected_service().to_string()
    }

    pub fn open(&self, label: Option<&str>) {
        self.handle
            .dispatch(DialogAction::Open(label.map(str::to_string)));
    }

    pub fn open_default(&self) {
        self.open(None);
    }

    pub fn select_service(&self, label: &str) {
        self.handle
            .dispatch(DialogAction::SelectService(label.to_string()));
    }

    /// Preselects a tier and shows the form for it.
    pub fn choose(&self, label: &str) {
        self.select_service(label);
        self.open(None);
    }

    pub fn close(&self) {
        self.handle.dispatch(DialogAction::Close);
    }

    pub fn open_callback(&self) -> Callback<MouseEvent> {
        let controller = self.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            controller.open_default();
        })
    }

    pub fn choose_callback(&self, label: String) -> Callback<MouseEvent> {
        let controller = self.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            controller.choose(&label);
        })
    }

    pub fn close_callback(&self) -> Callback<()> {
        let controller = self.clone();
        Callback::from(move |_| controller.close())
    }
}

#[hook]
pub fn use_dialog_controller(default_service: &str) -> DialogController {
    let default_service = default_service.to_string();
    let handle = use_reducer(move || DialogModel(DialogState::new(&default_service)));
    DialogController { handle }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: AttrValue,
    /// Service to preselect; `None` keeps whatever the dialog already has.
    #[prop_or_default]
    pub service: Option<AttrValue>,
    #[prop_or(AttrValue::from("cta-button"))]
    pub class: AttrValue,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let dialog = use_context::<DialogController>();

    let onclick = match (dialog, props.service.as_ref()) {
        (Some(dialog), Some(service)) => dialog.choose_callback(service.to_string()),
        (Some(dialog), None) => dialog.open_callback(),
        (None, _) => {
            log::warn!("CtaButton rendered outside a page dialog");
            Callback::noop()
        }
    };

    html! {
        <button class={props.class.to_string()} {onclick}>
            {props.label.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactDialogProps {
    pub business_types: &'static [BusinessType],
    #[prop_or(AttrValue::from("Schedule Your Free Consultation"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::from("What's your biggest marketing challenge?"))]
    pub message_label: AttrValue,
}

#[function_component(ContactDialog)]
pub fn contact_dialog(props: &ContactDialogProps) -> Html {
    let dialog = use_context::<DialogController>();
    let Some(dialog) = dialog else {
        log::warn!("ContactDialog rendered outside a page dialog");
        return html! {};
    };

    if !dialog.is_open() {
        return html! {};
    }

    let close_overlay = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.close())
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="contact-dialog-overlay" onclick={close_overlay.clone()}>
            <div class="contact-dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="contact-dialog-close" aria-label="Close" onclick={close_overlay}>
                    {"✕"}
                </button>
                <h2>{props.title.clone()}</h2>
                <LeadForm
                    selected_service={dialog.selected_service()}
                    business_types={props.business_types}
                    message_label={props.message_label.clone()}
                    on_close={dialog.close_callback()}
                />
            </div>
            <style>
                {r#"
                .contact-dialog-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                    padding: 1rem;
                }
                .contact-dialog {
                    position: relative;
                    background: #16181d;
                    color: #fff;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                    width: 100%;
                    max-width: 520px;
                    max-height: 90vh;
                    overflow-y: auto;
                }
                .contact-dialog h2 {
                    margin-top: 0;
                    font-size: 1.5rem;
                }
                .contact-dialog-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
