use common::fallback::FallbackLinks;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub links: FallbackLinks,
    pub email: String,
    pub phone_display: String,
    pub on_close: Callback<()>,
}

pub enum FallbackModalMsg {
    Close,
    Ignore,
}

/// Offered when the email service could not take the message.
pub struct FallbackModal {
    props: Props,
    link: ComponentLink<Self>,
}

impl Component for FallbackModal {
    type Properties = Props;
    type Message = FallbackModalMsg;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        FallbackModal { props, link }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        if let FallbackModalMsg::Close = msg {
            self.props.on_close.emit(());
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
        let links = &self.props.links;

        html! {
            <div
                id="contactFallbackModal"
                class="fallback-modal"
                onclick=self.link.callback(|_: MouseEvent| FallbackModalMsg::Close)
            >
                <div
                    class="fallback-modal-content"
                    onclick=self.link.callback(|e: MouseEvent| { e.stop_propagation(); FallbackModalMsg::Ignore })
                >
                    <div class="fallback-modal-close">
                        <button
                            type="button"
                            id="closeFallbackModal"
                            onclick=self.link.callback(|_: MouseEvent| FallbackModalMsg::Close)
                        >
                            {"×"}
                        </button>
                    </div>
                    <h2>{"Contact Form Error"}</h2>
                    <p>
                        {"We're having trouble sending your message through our form system. \
                          Please use one of these alternative methods to contact us:"}
                    </p>
                    <div class="fallback-channel">
                        <p><i class="fas fa-envelope"></i>{" Email Us:"}</p>
                        <a href=links.mailto.clone()>{&self.props.email}</a>
                    </div>
                    <div class="fallback-channel">
                        <p><i class="fas fa-phone"></i>{" Call Us:"}</p>
                        <a href=links.tel.clone()>{&self.props.phone_display}</a>
                    </div>
                    <div class="fallback-channel">
                        <p><i class="fab fa-whatsapp"></i>{" WhatsApp:"}</p>
                        <a href=links.whatsapp.clone() target="_blank" rel="noopener noreferrer">
                            {&self.props.phone_display}
                        </a>
                    </div>
                    <div class="fallback-backup">
                        <a class="btn" href=links.backup_form.clone()>{"Use Backup Contact Form"}</a>
                    </div>
                </div>
            </div>
        }
    }
}
