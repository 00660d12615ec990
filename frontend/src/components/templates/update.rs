//! Update function for the template browser, Elm style: mutate the state per
//! message and return whether the view should re-render.

use yew::prelude::*;

use super::browse::total_pages;
use super::messages::Msg;
use super::state::TemplateBrowser;

pub fn update(component: &mut TemplateBrowser, ctx: &Context<TemplateBrowser>, msg: Msg) -> bool {
    match msg {
        Msg::SetSearchTerm(term) => {
            component.browse.set_search_term(term);
            true
        }
        Msg::SetCategory(category) => {
            component.browse.set_category(category);
            true
        }
        Msg::GoToPage(page) => {
            let pages = total_pages(component.browse.filtered(component.catalog).len());
            component.browse.go_to_page(page, pages);
            scroll_to_top();
            true
        }
        Msg::SelectTemplate(template) => {
            component.selection.select(template);
            true
        }
        Msg::CancelSelection => {
            component.selection.cancel();
            true
        }
        Msg::ConfirmSelection => {
            if let Some(template) = component.selection.confirm() {
                ctx.props().on_select.emit(template.url);
            }
            true
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
