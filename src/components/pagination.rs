use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// Zero-based current page
    pub page: usize,
    pub page_count: usize,
    pub on_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.page_count == 0 {
        return Html::default();
    }

    let page = props.page.min(props.page_count - 1);
    let prev = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(page.saturating_sub(1)))
    };
    let next = {
        let on_change = props.on_change.clone();
        let last = props.page_count - 1;
        Callback::from(move |_: MouseEvent| on_change.emit((page + 1).min(last)))
    };

    html! {
        <nav class="pagination" aria-label="Table pages">
            <button onclick={prev} disabled={page == 0}>{"‹"}</button>
            <span class="page-info">{format!("Page {} of {}", page + 1, props.page_count)}</span>
            <button onclick={next} disabled={page + 1 >= props.page_count}>{"›"}</button>
        </nav>
    }
}
