use crate::models::raw::RawValue;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RawCellProps {
    pub value: RawValue,
}

/// Grid cell for an uncleaned value; every variant renders differently.
#[function_component(RawCell)]
pub fn raw_cell(props: &RawCellProps) -> Html {
    let class = props.value.css_class();

    match &props.value {
        RawValue::Number(_) => html! {
            <span {class}>{props.value.to_string()}</span>
        },
        // Numbers sent as strings line up with real numbers
        RawValue::Text(text) => {
            let numeric = props.value.as_number().map(|_| "cell-numeric");
            html! {
                <span class={classes!(class, numeric)}>{text}</span>
            }
        }
        RawValue::Missing => html! {
            <span {class}>{"—"}</span>
        },
        RawValue::Malformed(raw) => html! {
            <span {class} title={format!("Malformed value: {raw}")}>{"⚠ malformed"}</span>
        },
    }
}
