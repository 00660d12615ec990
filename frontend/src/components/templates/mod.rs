//! Template browser: search, category filter, paginated grid and a modal
//! confirmation step. The chosen template's image URL is emitted to the host
//! through the `on_select` prop; nothing else leaves this component.
//!
//! The catalog is loaded once, process-wide, by `crate::catalog`; a load
//! failure renders as an empty catalog rather than an error page.

pub(crate) mod browse;
mod dialogs;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TemplateBrowserProps;
pub use state::TemplateBrowser;

use yew::prelude::*;

impl Component for TemplateBrowser {
    type Message = Msg;
    type Properties = TemplateBrowserProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TemplateBrowser::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
