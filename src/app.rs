use gloo::history::{BrowserHistory, History};
use yew::prelude::*;

use crate::components::Nav;
use crate::router::Route;
use crate::views::{ChartsView, EnergyView, QualityView, TableView};

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(|| Route::from_path(BrowserHistory::new().location().path()));

    // Follow back/forward navigation
    {
        let route = route.clone();
        use_effect_with((), move |()| {
            let history = BrowserHistory::new();
            let listener = history.clone().listen(move || {
                route.set(Route::from_path(history.location().path()));
            });

            move || drop(listener)
        });
    }

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            BrowserHistory::new().push(target.path());
            route.set(target);
        })
    };

    // Each page owns its state; switching route unmounts the previous one
    let page = match *route {
        Route::Table => html! { <TableView /> },
        Route::Charts => html! { <ChartsView /> },
        Route::Energy => html! { <EnergyView /> },
        Route::Quality => html! { <QualityView /> },
        Route::NotFound => html! {
            <section class="card">
                <h2>{"Page not found"}</h2>
            </section>
        },
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"DirtySales Analytics"}</h1>
                <Nav current={*route} {on_navigate} />
            </header>

            <main class="app-main">
                {page}
            </main>
        </div>
    }
}
