use common::FormKind;
use yew::prelude::{html, Children, Component, ComponentLink, Properties, ShouldRender};
use yew_router::components::RouterAnchor;

use crate::components::index::AppRoute;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub organization: String,
    #[prop_or_default]
    pub children: Children,
}

pub struct Layout {
    props: Props,
    _link: ComponentLink<Self>,
}

impl Component for Layout {
    type Message = ();
    type Properties = Props;

    fn create(props: Self::Properties, _link: yew::ComponentLink<Self>) -> Self {
        Layout { props, _link }
    }

    fn view(&self) -> yew::Html {
        html! {
            <>
                <nav class="navbar">
                    <span class="logo">{&self.props.organization}</span>
                    <ul class="nav-links">
                        { for FormKind::all().map(|kind| html! {
                            <li>
                                <RouterAnchor<AppRoute> route=AppRoute::from(kind)>
                                    {kind.title()}
                                </RouterAnchor<AppRoute>>
                            </li>
                        }) }
                    </ul>
                </nav>
                <main>
                    { for self.props.children.iter() }
                </main>
            </>
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
