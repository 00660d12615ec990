use crate::app::App;

mod api;
mod app;
mod catalog;
mod components;

fn main() {
    yew::Renderer::<App>::new().render();
}
