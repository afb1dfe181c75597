use std::future::Future;

use futures::future::{abortable, AbortHandle, Abortable};
use gloo_timers::callback::Timeout;
use leads::form::SUCCESS_CLOSE_DELAY;
use leads::{BusinessType, Field, FormPhase, LeadForm as FormState, SubmissionTicket, SubmitAttempt, SubmitError};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub selected_service: String,
    pub business_types: &'static [BusinessType],
    #[prop_or(AttrValue::from("What's your biggest marketing challenge?"))]
    pub message_label: AttrValue,
    /// Fired once the success message has been shown long enough.
    #[prop_or_default]
    pub on_close: Callback<()>,
}

pub enum LeadFormMsg {
    Edit(Field, String),
    Submit,
    Finished(SubmissionTicket, Result<(), SubmitError>),
    Cancelled,
    CloseAfterSuccess,
}

/// Async work a mounted form still owes a callback for.
///
/// Generic over the timer so the bookkeeping can be checked without a browser.
struct Outstanding<T> {
    submission: Option<AbortHandle>,
    close_timer: Option<T>,
}

impl<T> Default for Outstanding<T> {
    fn default() -> Self {
        Self {
            submission: None,
            close_timer: None,
        }
    }
}

impl<T> Outstanding<T> {
    fn track_submission<F: Future>(&mut self, submission: F) -> Abortable<F> {
        let (submission, handle) = abortable(submission);
        if let Some(previous) = self.submission.replace(handle) {
            previous.abort();
        }
        submission
    }

    fn submission_settled(&mut self) {
        self.submission = None;
    }

    fn schedule_close(&mut self, timer: T) {
        self.close_timer = Some(timer);
    }

    fn close_fired(&mut self) {
        self.close_timer = None;
    }

    /// Aborts the submission and drops the timer, which cancels it.
    fn cancel_all(&mut self) {
        if let Some(handle) = self.submission.take() {
            handle.abort();
        }
        drop(self.close_timer.take());
    }
}

pub struct LeadForm {
    form: FormState,
    outstanding: Outstanding<Timeout>,
}

impl Component for LeadForm {
    type Message = LeadFormMsg;
    type Properties = LeadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: FormState::new(&ctx.props().selected_service),
            outstanding: Outstanding::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.form.sync_service(&ctx.props().selected_service);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::Edit(field, value) => self.form.set_field(field, value),
            LeadFormMsg::Submit => match self.form.submit(ctx.props().business_types) {
                SubmitAttempt::Accepted { ticket, lead } => {
                    let submission = self.outstanding.track_submission(api::submit_lead(lead));
                    ctx.link().send_future(async move {
                        match submission.await {
                            Ok(outcome) => LeadFormMsg::Finished(ticket, outcome),
                            Err(_aborted) => LeadFormMsg::Cancelled,
                        }
                    });
                    true
                }
                SubmitAttempt::Rejected => true,
                SubmitAttempt::Ignored => false,
            },
            LeadFormMsg::Finished(ticket, outcome) => {
                self.outstanding.submission_settled();
                if let Err(e) = &outcome {
                    log::warn!("Lead submission failed: {}", e);
                }
                if !self.form.complete(ticket, outcome) {
                    return false;
                }
                if self.form.phase() == FormPhase::Success {
                    let link = ctx.link().clone();
                    self.outstanding.schedule_close(Timeout::new(
                        config::millis(SUCCESS_CLOSE_DELAY),
                        move || link.send_message(LeadFormMsg::CloseAfterSuccess),
                    ));
                }
                true
            }
            LeadFormMsg::Cancelled => false,
            LeadFormMsg::CloseAfterSuccess => {
                self.outstanding.close_fired();
                self.form.acknowledge_success();
                ctx.props().on_close.emit(());
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // nothing may call back into a torn-down dialog
        self.outstanding.cancel_all();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.form.phase() == FormPhase::Success {
            return html! {
                <div class="lead-form-success">
                    <div class="lead-form-success-icon">{"✓"}</div>
                    <h3>{"Thank you!"}</h3>
                    <p>{"We received your request and will reach out within one business day."}</p>
                </div>
            };
        }

        let submitting = self.form.is_submitting();
        let link = ctx.link();
        let props = ctx.props();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadFormMsg::Submit
        });

        html! {
            <form class="lead-form" {onsubmit} novalidate=true>
                if let Some(banner) = self.form.banner() {
                    <div class="error-message form-banner" role="alert">{banner}</div>
                }

                <div class="form-row">
                    <label for="lead-service">{"Selected service"}</label>
                    <input
                        id="lead-service"
                        name={Field::SelectedService.key()}
                        type="text"
                        readonly=true
                        value={self.form.value(Field::SelectedService).to_string()}
                    />
                    {self.field_error(Field::SelectedService)}
                </div>

                {self.text_input(ctx, Field::Name, "Full name", "text", "Jane Smith", submitting)}
                {self.text_input(ctx, Field::Email, "Email", "email", "jane@yourbusiness.com", submitting)}
                {self.text_input(ctx, Field::Phone, "Phone", "tel", "(555) 123-4567", submitting)}

                <div class="form-row">
                    <label for="lead-businessType">{"Business type"}</label>
                    <select
                        id="lead-businessType"
                        name={Field::BusinessType.key()}
                        disabled={submitting}
                        onchange={link.callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            LeadFormMsg::Edit(Field::BusinessType, select.value())
                        })}
                    >
                        <option value="" selected={self.form.value(Field::BusinessType).is_empty()}>
                            {"Select your business type"}
                        </option>
                        { for props.business_types.iter().map(|option| html! {
                            <option
                                value={option.value}
                                selected={self.form.value(Field::BusinessType) == option.value}
                            >
                                {option.label}
                            </option>
                        }) }
                    </select>
                    {self.field_error(Field::BusinessType)}
                </div>

                <div class="form-row">
                    <label for="lead-message">{props.message_label.clone()}</label>
                    <textarea
                        id="lead-message"
                        name={Field::Message.key()}
                        rows="4"
                        disabled={submitting}
                        value={self.form.value(Field::Message).to_string()}
                        oninput={link.callback(|e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            LeadFormMsg::Edit(Field::Message, area.value())
                        })}
                    />
                    {self.field_error(Field::Message)}
                </div>

                <button type="submit" class="cta-button lead-form-submit" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Get My Free Consultation" } }
                </button>
                <style>{LEAD_FORM_STYLE}</style>
            </form>
        }
    }
}

impl LeadForm {
    fn field_error(&self, field: Field) -> Html {
        match self.form.error(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    }

    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &'static str,
        input_type: &'static str,
        placeholder: &'static str,
        disabled: bool,
    ) -> Html {
        let id = format!("lead-{}", field.key());
        html! {
            <div class="form-row">
                <label for={id.clone()}>{label}</label>
                <input
                    id={id.clone()}
                    name={field.key()}
                    type={input_type}
                    {placeholder}
                    {disabled}
                    class={classes!(self.form.error(field).is_some().then_some("invalid"))}
                    value={self.form.value(field).to_string()}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        LeadFormMsg::Edit(field, input.value())
                    })}
                />
                {self.field_error(field)}
            </div>
        }
    }
}

const LEAD_FORM_STYLE: &str = r#"
.lead-form .form-row {
    display: flex;
    flex-direction: column;
    gap: 0.35rem;
    margin-bottom: 1rem;
}
.lead-form label {
    font-size: 0.9rem;
    color: rgba(255, 255, 255, 0.8);
}
.lead-form input,
.lead-form select,
.lead-form textarea {
    padding: 0.75rem;
    border-radius: 8px;
    border: 1px solid rgba(255, 255, 255, 0.15);
    background: rgba(255, 255, 255, 0.05);
    color: #fff;
    font-size: 1rem;
}
.lead-form input[readonly] {
    opacity: 0.7;
}
.lead-form .invalid {
    border-color: #ff6b6b;
}
.lead-form .field-error {
    color: #ff6b6b;
    font-size: 0.85rem;
    margin: 0;
}
.lead-form .form-banner {
    background: rgba(255, 107, 107, 0.1);
    border: 1px solid rgba(255, 107, 107, 0.4);
    border-radius: 8px;
    padding: 0.75rem;
    margin-bottom: 1rem;
}
.lead-form-submit {
    width: 100%;
}
.lead-form-submit:disabled {
    opacity: 0.6;
    cursor: wait;
}
.lead-form-success {
    text-align: center;
    padding: 2rem 0;
}
.lead-form-success-icon {
    font-size: 3rem;
    color: #4cd964;
}
"#;
