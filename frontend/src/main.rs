use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components;
mod effects;
mod pages;
mod utils;
mod waitlist;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => html! { <Landing /> },
        // single-page site, anything unknown goes back to the landing page
        Route::NotFound => html! { <Redirect<Route> to={Route::Landing} /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting LOREO landing page");
    yew::Renderer::<App>::new().render();
}
