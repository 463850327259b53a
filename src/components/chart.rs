use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{AreaStyle, AxisLabel, AxisType, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Line,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::sales::Dashboard;

const CHART_ID: &str = "revenue-chart";

#[derive(Properties, PartialEq)]
pub struct RevenueChartProps {
    pub dashboard: Rc<Dashboard>,
}

#[function_component(RevenueChart)]
pub fn revenue_chart(props: &RevenueChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.dashboard.clone(), |dashboard| dashboard.series_data());

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (series_data, container_ref),
            |(series_data, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, series_data);

                    let series_data = series_data.clone();
                    EventListener::new(&gloo::utils::window(), "resize", move |_| {
                        render_chart(&container, &series_data);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series_data: &(Vec<String>, Vec<f64>)) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series_data);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(&format!("Render error: {e:?}"));
    }
}

fn build_chart(series_data: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (dates, revenue) = series_data;
    let muted = "#6b7280";

    CharmingChart::new()
        .title(Title::new().text("Revenue over time").left("left"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(Grid::new().top("15%").left("3%").right("4%").bottom("6%").contain_label(true))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(dates.clone())
                .axis_label(AxisLabel::new().color(muted)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("€")
                .axis_label(AxisLabel::new().color(muted)),
        )
        .series(
            Line::new()
                .name("Revenue")
                .smooth(true)
                .area_style(AreaStyle::new().opacity(0.15))
                .data(revenue.clone()),
        )
}
