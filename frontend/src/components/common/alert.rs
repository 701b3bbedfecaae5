use yew::prelude::{
    html, Callback, Children, Component, ComponentLink, MouseEvent, Properties, ShouldRender,
};

#[derive(Clone, PartialEq)]
pub enum AlertKind {
    Error,
    Success,
}

pub struct Alert {
    props: Props,
    _link: ComponentLink<Self>,
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub kind: AlertKind,
    /// Renders a close button when set.
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

impl Component for Alert {
    type Properties = Props;
    type Message = ();

    fn create(props: Self::Properties, _link: yew::ComponentLink<Self>) -> Self {
        Alert { props, _link }
    }

    fn view(&self) -> yew::Html {
        html! {
            <div class=self.classes() role="alert">
                { for self.props.children.iter() }
                { match &self.props.on_dismiss {
                    Some(on_dismiss) => {
                        let on_dismiss = on_dismiss.clone();
                        html! {
                            <button
                                type="button"
                                class="close"
                                aria-label="Close"
                                onclick=Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
                            >
                                {"×"}
                            </button>
                        }
                    }
                    None => html! {},
                }}
            </div>
        }
    }

    fn update(&mut self, _: <Self as yew::Component>::Message) -> ShouldRender {
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
}

impl Alert {
    fn classes(&self) -> &'static str {
        match self.props.kind {
            AlertKind::Error => "alert error-alert",
            AlertKind::Success => "alert success-message",
        }
    }
}
