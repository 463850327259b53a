use dirtysales_dashboard::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
