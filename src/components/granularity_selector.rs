use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::sales::Granularity;

#[derive(Properties, PartialEq)]
pub struct GranularitySelectorProps {
    pub granularity: Granularity,
    pub on_change: Callback<Granularity>,
}

/// Time-bucket dropdown for the revenue series
#[function_component(GranularitySelector)]
pub fn granularity_selector(props: &GranularitySelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(granularity) = target.value().parse::<Granularity>() {
                callback.emit(granularity);
            }
        })
    };

    html! {
        <select
            class="granularity-selector"
            onchange={on_change}
            aria-label="Select time bucket"
        >
            {
                Granularity::all().iter().map(|g| {
                    let selected = *g == props.granularity;
                    html! {
                        <option value={g.as_str()} {selected}>{g.label()}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
