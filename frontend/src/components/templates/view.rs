//! View rendering for the template browser.
//!
//! The page is a header, a filter bar (search box plus category buttons), a
//! results line, the paginated grid and the pagination controls. The
//! confirmation modal is rendered last so it overlays everything while open.
//! All derived values (filtered list, page count, page slice) are recomputed
//! here on every render from the current state.

use common::model::template::TemplateRecord;
use num_format::{Locale, ToFormattedString};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::browse::{page_numbers, total_pages, PAGE_SIZE};
use super::dialogs::preview::selection_dialog;
use super::messages::Msg;
use super::state::TemplateBrowser;

/// Main view function for the template browser.
pub fn view(component: &TemplateBrowser, ctx: &Context<TemplateBrowser>) -> Html {
    let link = ctx.link();
    let filtered = component.browse.filtered(component.catalog);
    let pages = total_pages(filtered.len());
    let page = component.browse.page_slice(&filtered);

    html! {
        <div class="template-browser">
            { build_header(ctx) }
            { build_filter_bar(component, link) }
            { build_results_info(component, filtered.len(), page.len()) }
            { build_grid(page, link) }
            { build_pagination(component.browse.current_page, pages, link) }
            { selection_dialog(component, link) }
        </div>
    }
}

/// Back button and page title.
fn build_header(ctx: &Context<TemplateBrowser>) -> Html {
    let on_back = ctx.props().on_back.clone();
    html! {
        <div class="browser-header">
            <button class="back-btn" onclick={Callback::from(move |_| on_back.emit(()))}>
                { "\u{2190} Back to Generator" }
            </button>
            <h1>{ "Meme Templates" }</h1>
        </div>
    }
}

/// Search input and one button per derived category.
fn build_filter_bar(component: &TemplateBrowser, link: &Scope<TemplateBrowser>) -> Html {
    let category_buttons = component
        .categories
        .iter()
        .map(|category| {
            let active = *category == component.browse.selected_category;
            let value = category.clone();
            html! {
                <button
                    class={classes!("category-btn", active.then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetCategory(value.clone()))}
                >
                    { category }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="filter-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Search meme templates..."
                value={component.browse.search_term.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetSearchTerm(input.value())
                })}
            />
            <div class="category-bar">{ category_buttons }</div>
        </div>
    }
}

/// "Showing X-Y of Z templates", or the empty states.
fn build_results_info(component: &TemplateBrowser, filtered_len: usize, shown: usize) -> Html {
    let text = if component.catalog.is_empty() {
        "No templates available.".to_string()
    } else if filtered_len == 0 {
        "No templates match your search.".to_string()
    } else {
        let start = (component.browse.current_page - 1) * PAGE_SIZE + 1;
        format!(
            "Showing {}-{} of {} templates",
            start,
            start + shown - 1,
            filtered_len.to_formatted_string(&Locale::en)
        )
    };

    html! { <div class="results-info">{ text }</div> }
}

/// The grid of the current page. A click opens the confirmation modal.
fn build_grid(page: &[&TemplateRecord], link: &Scope<TemplateBrowser>) -> Html {
    let items = page
        .iter()
        .map(|template| {
            let record = (*template).clone();
            html! {
                <div
                    class="template-card"
                    onclick={link.callback(move |_| Msg::SelectTemplate(record.clone()))}
                >
                    <img src={template.url.clone()} alt={template.name.clone()} loading="lazy" />
                    <p class="template-name">{ &template.name }</p>
                </div>
            }
        })
        .collect::<Html>();

    html! { <div class="template-grid">{ items }</div> }
}

/// Prev/next plus the sliding window of page numbers. Hidden entirely when a
/// single page holds everything.
fn build_pagination(current: usize, pages: usize, link: &Scope<TemplateBrowser>) -> Html {
    if pages <= 1 {
        return html! {};
    }

    let numbers = page_numbers(current, pages)
        .into_iter()
        .map(|n| {
            let active = n == current;
            html! {
                <button
                    class={classes!("page-btn", active.then_some("active"))}
                    onclick={link.callback(move |_| Msg::GoToPage(n))}
                >
                    { n }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="pagination">
            <button
                class="page-btn"
                disabled={current == 1}
                onclick={link.callback(move |_| Msg::GoToPage(current.saturating_sub(1)))}
            >
                { "\u{2039}" }
            </button>
            { numbers }
            <button
                class="page-btn"
                disabled={current == pages}
                onclick={link.callback(move |_| Msg::GoToPage(current + 1))}
            >
                { "\u{203a}" }
            </button>
        </div>
    }
}
