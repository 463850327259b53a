use crate::config::Config;
use crate::models::sales::Kpis;
use crate::utils::format::MoneyLocale;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KpiCardsProps {
    /// `None` until the dashboard has loaded
    pub kpis: Option<Kpis>,
    pub locale: MoneyLocale,
    pub on_locale: Callback<MoneyLocale>,
}

#[function_component(KpiCards)]
pub fn kpi_cards(props: &KpiCardsProps) -> Html {
    let cards = props.kpis.as_ref().map_or_else(
        || Kpis::placeholder_cards(Config::CARD_PLACEHOLDER),
        |kpis| kpis.cards_in(props.locale),
    );

    let on_change = {
        let callback = props.on_locale.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(locale) = target.value().parse::<MoneyLocale>() {
                callback.emit(locale);
            }
        })
    };

    html! {
        <div class="data-summary">
            <select
                class="locale-selector"
                onchange={on_change}
                aria-label="Amount format"
            >
                {
                    MoneyLocale::all().iter().map(|l| {
                        let selected = *l == props.locale;
                        html! {
                            <option value={l.code()} {selected}>{l.label()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
            <div class="summary-grid">
                { for cards.into_iter().map(|card| html! {
                    <div class="summary-item" key={card.title}>
                        <h3>{card.title}</h3>
                        <p class="summary-value">{card.value}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}
