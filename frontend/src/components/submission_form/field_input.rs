use common::fields::{FieldSpec, InputKind};
use common::submission::FieldValue;
use common::validate::FieldError;
use yew::prelude::*;

use crate::js_functions::file_metadata;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub spec: &'static FieldSpec,
    pub value: FieldValue,
    #[prop_or_default]
    pub error: Option<FieldError>,
    pub disabled: bool,
    pub on_change: Callback<FieldValue>,
    pub on_blur: Callback<()>,
    pub on_remove: Callback<usize>,
}

pub enum FieldInputMsg {
    Input(String),
    Toggle,
    Files(ChangeData),
    Blur,
    Remove(usize),
}

pub struct FieldInput {
    props: Props,
    link: ComponentLink<Self>,
}

impl Component for FieldInput {
    type Properties = Props;
    type Message = FieldInputMsg;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        FieldInput { props, link }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            FieldInputMsg::Input(value) => self.props.on_change.emit(FieldValue::Text(value)),
            FieldInputMsg::Toggle => {
                let checked = self.props.value.is_checked();
                self.props.on_change.emit(FieldValue::Flag(!checked));
            }
            FieldInputMsg::Files(ChangeData::Files(files)) => {
                self.props
                    .on_change
                    .emit(FieldValue::Files(file_metadata(&files)));
            }
            FieldInputMsg::Files(_) => {}
            FieldInputMsg::Blur => self.props.on_blur.emit(()),
            FieldInputMsg::Remove(index) => self.props.on_remove.emit(index),
        }

        false
    }

    fn change(&mut self, props: Self::Properties) -> ShouldRender {
        if self.props != props {
            self.props = props;
            true
        } else {
            false
        }
    }

    fn view(&self) -> Html {
        let spec = self.props.spec;
        let required = if spec.is_required() { " *" } else { "" };

        if spec.input == InputKind::Checkbox {
            return html! {
                <div class="form-group checkbox-group">
                    { self.control() }
                    <label for=spec.id>{spec.label}{required}</label>
                    { self.error_message() }
                </div>
            };
        }

        html! {
            <div class="form-group">
                <label for=spec.id>{spec.label}{required}</label>
                { self.control() }
                { self.error_message() }
            </div>
        }
    }
}

impl FieldInput {
    fn class(&self) -> &'static str {
        if self.props.error.is_some() {
            "error-input"
        } else {
            ""
        }
    }

    fn error_message(&self) -> Html {
        match &self.props.error {
            Some(error) => html! { <div class="error-message">{error.to_string()}</div> },
            None => html! {},
        }
    }

    fn control(&self) -> Html {
        let spec = self.props.spec;
        let disabled = self.props.disabled;
        let onblur = self.link.callback(|_: FocusEvent| FieldInputMsg::Blur);

        match spec.input {
            InputKind::TextArea => html! {
                <textarea
                    id=spec.id
                    name=spec.id
                    rows="5"
                    class=self.class()
                    disabled=disabled
                    value=self.props.value.as_text().to_owned()
                    oninput=self.link.callback(|event: InputData| FieldInputMsg::Input(event.value))
                    onblur=onblur
                />
            },
            InputKind::Choice(choices) => {
                let current = self.props.value.as_text();
                html! {
                    <select
                        id=spec.id
                        name=spec.id
                        class=self.class()
                        disabled=disabled
                        onchange=self.link.callback(|change: ChangeData| match change {
                            ChangeData::Select(select) => FieldInputMsg::Input(select.value()),
                            ChangeData::Value(value) => FieldInputMsg::Input(value),
                            ChangeData::Files(_) => FieldInputMsg::Input(String::new()),
                        })
                        onblur=onblur
                    >
                        <option value="" selected=current.is_empty()>{"Please select"}</option>
                        { for choices.iter().map(|choice| html! {
                            <option value=choice.value selected={choice.value == current}>
                                {choice.label}
                            </option>
                        }) }
                    </select>
                }
            }
            InputKind::Checkbox => html! {
                <input
                    type="checkbox"
                    id=spec.id
                    name=spec.id
                    class=self.class()
                    disabled=disabled
                    checked=self.props.value.is_checked()
                    onchange=self.link.callback(|_: ChangeData| FieldInputMsg::Toggle)
                    onblur=onblur
                />
            },
            InputKind::Upload(policy) => {
                let files = self.props.value.files();
                html! {
                    <>
                        <input
                            type="file"
                            id=spec.id
                            name=spec.id
                            class=self.class()
                            accept=policy.accept()
                            multiple=policy.multiple
                            disabled=disabled
                            onchange=self.link.callback(FieldInputMsg::Files)
                            onblur=onblur
                        />
                        { if files.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <ul class="file-preview">
                                    { for files.iter().enumerate().map(|(index, file)| html! {
                                        <li class="file-preview-item">
                                            <span class="file-name">{&file.name}</span>
                                            <button
                                                type="button"
                                                class="remove-file-btn"
                                                disabled=disabled
                                                onclick=self.link.callback(move |_: MouseEvent| FieldInputMsg::Remove(index))
                                            >
                                                {"×"}
                                            </button>
                                        </li>
                                    }) }
                                </ul>
                            }
                        }}
                    </>
                }
            }
            kind => html! {
                <input
                    type=kind.html_type().unwrap_or("text")
                    id=spec.id
                    name=spec.id
                    class=self.class()
                    disabled=disabled
                    value=self.props.value.as_text().to_owned()
                    oninput=self.link.callback(|event: InputData| FieldInputMsg::Input(event.value))
                    onblur=onblur
                />
            },
        }
    }
}
