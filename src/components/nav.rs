use yew::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    html! {
        <nav class="app-nav">
            {
                Route::nav_items().iter().map(|route| {
                    let route = *route;
                    let onclick = props.on_navigate.reform(move |e: MouseEvent| {
                        e.prevent_default();
                        route
                    });
                    let class = classes!("nav-link", (route == props.current).then_some("active"));
                    html! {
                        <a href={route.path()} {class} {onclick}>{route.title()}</a>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
