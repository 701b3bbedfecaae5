use yew::prelude::{html, Component, ShouldRender};

/// Spinner shown in a submit button while the request is in flight.
pub struct Loader;

impl Component for Loader {
    type Properties = ();
    type Message = ();

    fn create(_props: Self::Properties, _link: yew::ComponentLink<Self>) -> Self {
        Self
    }

    fn view(&self) -> yew::Html {
        html! {
            <i class="fas fa-spinner fa-spin" aria-hidden="true"></i>
        }
    }

    fn update(&mut self, _: <Self as yew::Component>::Message) -> ShouldRender {
        false
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        false
    }
}
