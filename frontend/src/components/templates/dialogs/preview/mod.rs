use yew::html::Scope;
use yew::prelude::*;

use crate::components::templates::{Msg, TemplateBrowser};

/// Full-screen confirmation overlay for the pending selection. The overlay
/// covers the whole viewport, so the browser behind it cannot be interacted
/// with while it is open.
pub fn selection_dialog(component: &TemplateBrowser, link: &Scope<TemplateBrowser>) -> Html {
    if !component.selection.modal_open {
        return html! {};
    }
    let Some(template) = component.selection.pending.as_ref() else {
        return html! {};
    };

    html! {
        <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;display:flex;flex-direction:column;align-items:center;justify-content:center;">
            <button
                onclick={link.callback(|_| Msg::CancelSelection)}
                style="position:absolute;top:24px;right:32px;z-index:10000;padding:0.5rem 1rem;font-size:1.5rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
            >
                { "\u{2715}" }
            </button>
            <h3 style="color:#fff;margin-bottom:16px;">{ &template.name }</h3>
            <img
                src={template.url.clone()}
                alt={template.name.clone()}
                style="max-width:80vw;max-height:60vh;object-fit:contain;margin-bottom:24px;border-radius:4px;"
            />
            <div style="display:flex;gap:12px;">
                <button
                    style="padding:0.5rem 1.5rem;font-size:1rem;background:#fff;color:#333;border:none;border-radius:4px;cursor:pointer;"
                    onclick={link.callback(|_| Msg::CancelSelection)}
                >
                    { "Cancel" }
                </button>
                <button
                    style="padding:0.5rem 1.5rem;font-size:1rem;background:#7c3aed;color:#fff;border:none;border-radius:4px;cursor:pointer;"
                    onclick={link.callback(|_| Msg::ConfirmSelection)}
                >
                    { "Select This Template" }
                </button>
            </div>
        </div>
    }
}
