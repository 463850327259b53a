use crate::hooks::fetch_state::FetchPhase;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub phase: FetchPhase,
    pub on_retry: Callback<()>,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.phase {
        FetchPhase::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading…"}</p>
            </div>
        },
        FetchPhase::Loaded => Html::default(),
        FetchPhase::Failed(msg) => {
            let onclick = props.on_retry.reform(|_: MouseEvent| ());
            html! {
                <div class="status error" role="alert">
                    <p>{"❌ Could not load data: "}{msg}</p>
                    <button class="retry-button" {onclick}>{"Retry"}</button>
                </div>
            }
        }
    }
}
