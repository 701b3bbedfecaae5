pub mod fallback_modal;
pub mod field_input;

use std::rc::Rc;
use std::time::Duration;

use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::{html, Component, ComponentLink, FocusEvent, Html, Properties, ShouldRender};
use yew::services::timeout::{TimeoutService, TimeoutTask};

use common::submission::FieldValue;
use common::{Config, DeliveryError, Error, FormKind, FormState, Metadata, SubmissionStatus};

use crate::actions::submit_enquiry;
use crate::components::{
    common::{
        alert::{Alert, AlertKind},
        loader::Loader,
        title::Title,
    },
    submission_form::{fallback_modal::FallbackModal, field_input::FieldInput},
};

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub kind: FormKind,
    pub config: Rc<Config>,
}

pub enum SubmissionFormMsg {
    Update(&'static str, FieldValue),
    Blur(&'static str),
    RemoveFile(&'static str, usize),
    Submit,
    Delivered(u32, Result<(), DeliveryError>),
    HideBanner,
    CloseFallback,
}

pub struct SubmissionForm {
    link: ComponentLink<Self>,
    props: Props,
    form: FormState,
    banner: Option<TimeoutTask>,
    // Bumped on every reset so file inputs are recreated empty.
    generation: u32,
}

impl Component for SubmissionForm {
    type Properties = Props;
    type Message = SubmissionFormMsg;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        Self {
            link,
            form: FormState::new(props.kind),
            props,
            banner: None,
            generation: 0,
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            Self::Message::Update(id, value) => self.form.update(id, value),
            Self::Message::Blur(id) => self.form.blur(id),
            Self::Message::RemoveFile(id, index) => {
                self.form.remove_file(id, index);
                self.generation += 1;
            }
            Self::Message::Submit => {
                let meta = Metadata::now(self.props.config.organization.clone());
                match self.form.submit(&meta) {
                    Ok(payload) => {
                        self.banner = None;
                        let link = self.link.clone();
                        let config = self.props.config.clone();
                        let ticket = self.form.ticket();
                        spawn_local(async move {
                            submit_enquiry(&link, config, ticket, payload).await;
                        });
                    }
                    Err(Error::Invalid(report)) => {
                        debug!("{} form has {} invalid field(s)", self.props.kind, report.len());
                    }
                    Err(e) => {
                        debug!("{} form not submitted: {}", self.props.kind, e);
                        return false;
                    }
                }
            }
            Self::Message::Delivered(ticket, result) => {
                if !self.form.complete(ticket, result) {
                    return false;
                }
                if self.form.status == SubmissionStatus::Sent {
                    self.generation += 1;
                    let timeout = Duration::from_millis(self.props.config.banner_timeout_ms.into());
                    self.banner = Some(TimeoutService::spawn(
                        timeout,
                        self.link.callback(|_| SubmissionFormMsg::HideBanner),
                    ));
                }
            }
            Self::Message::HideBanner => {
                self.banner = None;
                if self.form.status == SubmissionStatus::Sent {
                    self.form.dismiss();
                }
            }
            Self::Message::CloseFallback => self.form.dismiss(),
        };

        true
    }

    fn change(&mut self, props: Self::Properties) -> ShouldRender {
        if self.props == props {
            return false;
        }

        if self.props.kind != props.kind {
            self.form.switch(props.kind);
            self.banner = None;
            self.generation += 1;
        }
        self.props = props;
        true
    }

    fn view(&self) -> Html {
        let kind = self.props.kind;
        let sending = self.form.status.is_sending();

        html! {
            <section class=format!("form-section {}", kind)>
                <Title>{kind.title()}</Title>
                { self.status_view() }
                <form
                    id=kind.form_id()
                    class=self.form.status.class_name()
                    novalidate=true
                    onsubmit=self.link.callback(|e: FocusEvent| { e.prevent_default(); SubmissionFormMsg::Submit })
                >
                    { for kind.fields().iter().map(|spec| {
                        let id = spec.id;
                        html! {
                            <FieldInput
                                key=format!("{}-{}", id, self.generation)
                                spec=spec
                                value=self.form.values.get(id).cloned().unwrap_or_else(|| FieldValue::empty_for(&spec.input))
                                error=self.form.annotations.get(id).cloned()
                                disabled=sending
                                on_change=self.link.callback(move |value| SubmissionFormMsg::Update(id, value))
                                on_blur=self.link.callback(move |_| SubmissionFormMsg::Blur(id))
                                on_remove=self.link.callback(move |index| SubmissionFormMsg::RemoveFile(id, index))
                            />
                        }
                    }) }
                    <button type="submit" class="btn submit-btn" disabled=sending>
                        { if sending { html! { <Loader /> } } else { html! {} } }
                        {" "}
                        {self.form.submit_label()}
                    </button>
                </form>
            </section>
        }
    }
}

impl SubmissionForm {
    fn status_view(&self) -> Html {
        let config = &self.props.config;

        match &self.form.status {
            SubmissionStatus::Sent => html! {
                <Alert
                    kind=AlertKind::Success
                    on_dismiss=Some(self.link.callback(|_| SubmissionFormMsg::HideBanner))
                >
                    {self.props.kind.success_message()}
                </Alert>
            },
            SubmissionStatus::Failed(e) => {
                let links = config
                    .contact
                    .links(&config.organization, self.props.kind, &self.form.values);
                html! {
                    <>
                        <Alert kind=AlertKind::Error>
                            {format!(
                                "Failed to submit your inquiry ({}). Please try again later or contact us directly at {}",
                                e, config.contact.email
                            )}
                        </Alert>
                        <FallbackModal
                            links=links
                            email=config.contact.email.clone()
                            phone_display=config.contact.phone_display.clone()
                            on_close=self.link.callback(|_| SubmissionFormMsg::CloseFallback)
                        />
                    </>
                }
            }
            SubmissionStatus::Initial | SubmissionStatus::Sending => html! {},
        }
    }
}
