use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::energy::{EnergyParam, EnergyParams, ParamDraft};
use crate::utils::debounce::Debouncer;

#[derive(Properties, PartialEq)]
pub struct EnergyParamsFormProps {
    pub params: EnergyParams,
    /// Called with the edited parameters once typing settles
    pub on_change: Callback<EnergyParams>,
}

/// Inputs for the telemetry request parameters.
///
/// Edits are kept in a local draft and forwarded after
/// `Config::PARAM_DEBOUNCE_MS` of inactivity, so a multi-digit value does
/// not fire one request per keystroke. Invalid input is reported inline
/// and never forwarded; a pending valid edit to another field still goes out.
#[function_component(EnergyParamsForm)]
pub fn energy_params_form(props: &EnergyParamsFormProps) -> Html {
    let draft = use_state(|| ParamDraft::new(props.params));
    let debouncer = use_memo((), |()| Debouncer::new(Config::PARAM_DEBOUNCE_MS));

    let fields = EnergyParam::all().iter().map(|param| {
        let param = *param;
        let oninput = {
            let draft = draft.clone();
            let debouncer = debouncer.clone();
            let on_change = props.on_change.clone();

            Callback::from(move |e: InputEvent| {
                let Some(input) = e
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                else {
                    return;
                };

                let mut next = (*draft).clone();
                if let Some(params) = next.edit(param, &input.value()) {
                    let on_change = on_change.clone();
                    debouncer.schedule(move || on_change.emit(params));
                }
                draft.set(next);
            })
        };

        let min = if param == EnergyParam::Seed { "0" } else { "1" };
        html! {
            <label class="param-field" key={param.label()}>
                <span>{param.label()}</span>
                <input
                    type="number"
                    {min}
                    step="1"
                    value={param.get(&draft.params).to_string()}
                    {oninput}
                />
            </label>
        }
    });

    html! {
        <div class="energy-params">
            { for fields }
            if let Some(msg) = &draft.error {
                <p class="param-error" role="alert">{msg}</p>
            }
        </div>
    }
}
