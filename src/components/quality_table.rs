use std::rc::Rc;
use yew::prelude::*;

use crate::models::sales::DataQualityColumn;
use crate::utils::format::format_percent;

#[derive(Properties, PartialEq)]
pub struct QualityTableProps {
    pub columns: Rc<Vec<DataQualityColumn>>,
}

#[function_component(QualityTable)]
pub fn quality_table(props: &QualityTableProps) -> Html {
    html! {
        <table class="quality-table">
            <thead>
                <tr>
                    <th>{"Column"}</th>
                    <th>{"Missing"}</th>
                    <th>{"Invalid"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.columns.iter().map(|c| html! {
                    <tr key={c.column.clone()}>
                        <td>{&c.column}</td>
                        <td>{format_percent(c.missing_rate)}</td>
                        <td>{format_percent(c.invalid_rate)}</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
