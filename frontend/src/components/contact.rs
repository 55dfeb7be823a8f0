use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::{ApiError, HttpApi, PortfolioApi};
use crate::models::ContactMessage;

pub const SUBMIT_ERROR: &str = "Failed to send message. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Local state of the contact form. Presence of each field is left to
/// the inputs' `required` attribute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactMessage,
    pub status: SubmitStatus,
    pub error: Option<&'static str>,
}

impl ContactForm {
    /// Returns false once the form has been sent; the confirmation view
    /// takes over and nothing is editable.
    pub fn set(&mut self, field: Field, value: String) -> bool {
        if self.status == SubmitStatus::Submitted {
            return false;
        }
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
        true
    }

    /// Moves to `Submitting` and hands out the body to send. `None` while a
    /// request is already out or after success.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.status != SubmitStatus::Idle {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        self.error = None;
        Some(self.fields.clone())
    }

    pub fn finish(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.status = SubmitStatus::Submitted;
                self.fields = ContactMessage::default();
            }
            Err(_) => {
                self.status = SubmitStatus::Idle;
                self.error = Some(SUBMIT_ERROR);
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }
}

pub async fn deliver<A: PortfolioApi>(api: &A, message: ContactMessage) -> Result<(), ApiError> {
    match api.submit_contact(&message).await {
        Ok(()) => {
            info!("Contact message sent for {}", message.email);
            Ok(())
        }
        Err(e) => {
            warn!("Error submitting contact form: {}", e);
            Err(e)
        }
    }
}

pub enum ContactMsg {
    Edit(Field, String),
    Submit,
    Finished(Result<(), ApiError>),
}

pub struct ContactSection {
    form: ContactForm,
}

impl Component for ContactSection {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => self.form.set(field, value),
            ContactMsg::Submit => match self.form.begin_submit() {
                Some(message) => {
                    ctx.link().send_future(async move {
                        ContactMsg::Finished(deliver(&HttpApi, message).await)
                    });
                    true
                }
                None => false,
            },
            ContactMsg::Finished(result) => {
                self.form.finish(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id="contact" class="contact-section">
                <style>
                    {r#"
                        .contact-section { padding: 5rem 1.5rem; background: #1f2937; }
                        .contact-form { max-width: 42rem; margin: 0 auto; background: #374151; padding: 2rem; border-radius: 0.5rem; }
                        .contact-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-bottom: 1.5rem; }
                        .contact-form label { display: block; color: #fff; margin-bottom: 0.5rem; }
                        .contact-form input, .contact-form textarea {
                            width: 100%; padding: 0.75rem 1rem; background: #4b5563; color: #fff;
                            border: none; border-radius: 0.5rem;
                        }
                        .contact-error { margin-bottom: 1.5rem; padding: 1rem; background: #dc2626; color: #fff; border-radius: 0.5rem; }
                        .contact-submit {
                            width: 100%; padding: 0.75rem; border: none; border-radius: 0.5rem; color: #fff; font-weight: 600;
                            background: linear-gradient(to right, #3b82f6, #9333ea); cursor: pointer;
                        }
                        .contact-submit:disabled { opacity: 0.5; cursor: not-allowed; }
                        .contact-sent { max-width: 42rem; margin: 0 auto; background: #16a34a; color: #fff; padding: 2rem; border-radius: 0.5rem; text-align: center; }
                        @media (max-width: 768px) {
                            .contact-row { grid-template-columns: 1fr; }
                        }
                    "#}
                </style>
                <div class="section-heading" data-aos="fade-up">
                    <h2>{"Ready to Grow Your Business?"}</h2>
                    <p>{"Let's discuss how we can help you achieve your social media goals"}</p>
                </div>
                if self.form.status == SubmitStatus::Submitted {
                    <div class="contact-sent">
                        <h3>{"Message Sent!"}</h3>
                        <p>{"Thank you for your message. We'll get back to you soon."}</p>
                    </div>
                } else {
                    { self.render_form(ctx) }
                }
            </section>
        }
    }
}

impl ContactSection {
    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let fields = &self.form.fields;
        let submitting = self.form.is_submitting();

        html! {
            <form
                class="contact-form"
                data-aos="fade-up"
                onsubmit={ctx.link().callback(|e: SubmitEvent| {
                    e.prevent_default();
                    ContactMsg::Submit
                })}
            >
                <div class="contact-row">
                    <div>
                        <label for="contact-name">{"Your Name"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            name="name"
                            required={true}
                            placeholder="Enter your name"
                            value={fields.name.clone()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                ContactMsg::Edit(Field::Name, input.value())
                            })}
                        />
                    </div>
                    <div>
                        <label for="contact-email">{"Your Email"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            name="email"
                            required={true}
                            placeholder="Enter your email"
                            value={fields.email.clone()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                ContactMsg::Edit(Field::Email, input.value())
                            })}
                        />
                    </div>
                </div>
                <div style="margin-bottom: 1.5rem;">
                    <label for="contact-message">{"Your Message"}</label>
                    <textarea
                        id="contact-message"
                        name="message"
                        required={true}
                        rows="5"
                        placeholder="Tell us about your project..."
                        value={fields.message.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            ContactMsg::Edit(Field::Message, input.value())
                        })}
                    />
                </div>
                if let Some(error) = self.form.error {
                    <div class="contact-error">{ error }</div>
                }
                <button type="submit" class="contact-submit" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Send Message" } }
                </button>
            </form>
        }
    }
}
