use std::rc::Rc;

use common::{Config, FormKind};
use log::{error, info};
use yew::prelude::{html, Component, ComponentLink, Html, ShouldRender};
use yew_router::prelude::{Router, Switch};

use crate::components::common::alert::{Alert, AlertKind};
use crate::components::layout::Layout;
use crate::components::submission_form::SubmissionForm;

#[derive(Switch, Debug, Clone, Copy, PartialEq)]
pub enum AppRoute {
    #[to = "/student"]
    Student,
    #[to = "/parent"]
    Parent,
    #[to = "/skilled"]
    Skilled,
    #[to = "/unskilled"]
    Unskilled,
    #[to = "/support"]
    Support,
    #[to = "/documentation"]
    Documentation,
    #[to = "/enquiry"]
    General,
    #[to = "/"]
    Contact,
}

impl From<FormKind> for AppRoute {
    fn from(kind: FormKind) -> Self {
        match kind {
            FormKind::Contact => AppRoute::Contact,
            FormKind::Student => AppRoute::Student,
            FormKind::Parent => AppRoute::Parent,
            FormKind::Skilled => AppRoute::Skilled,
            FormKind::Unskilled => AppRoute::Unskilled,
            FormKind::Support => AppRoute::Support,
            FormKind::Documentation => AppRoute::Documentation,
            FormKind::General => AppRoute::General,
        }
    }
}

impl From<AppRoute> for FormKind {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::Contact => FormKind::Contact,
            AppRoute::Student => FormKind::Student,
            AppRoute::Parent => FormKind::Parent,
            AppRoute::Skilled => FormKind::Skilled,
            AppRoute::Unskilled => FormKind::Unskilled,
            AppRoute::Support => FormKind::Support,
            AppRoute::Documentation => FormKind::Documentation,
            AppRoute::General => FormKind::General,
        }
    }
}

pub struct Index {
    config: Result<Rc<Config>, String>,
}

impl Component for Index {
    type Properties = ();
    type Message = ();

    fn create(_props: Self::Properties, _link: ComponentLink<Self>) -> Self {
        let config = match Config::load() {
            Ok(config) => {
                info!("Email service configured for {}", config.organization);
                Ok(Rc::new(config))
            }
            Err(e) => {
                error!("Invalid configuration: {}", e);
                Err(e.to_string())
            }
        };

        Self { config }
    }

    fn update(&mut self, _msg: Self::Message) -> ShouldRender {
        false
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        false
    }

    fn view(&self) -> Html {
        let config = match &self.config {
            Ok(config) => config.clone(),
            Err(e) => {
                return html! {
                    <Alert kind=AlertKind::Error>{format!("The forms are unavailable: {}", e)}</Alert>
                }
            }
        };

        html! {
            <Layout organization=config.organization.clone()>
                <Router<AppRoute, ()>
                    render = Router::render(move |switch: AppRoute| {
                        html!{ <SubmissionForm kind=FormKind::from(switch) config=config.clone() /> }
                    })
                />
            </Layout>
        }
    }
}
