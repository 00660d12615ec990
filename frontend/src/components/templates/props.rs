//! Properties for the `TemplateBrowser` component.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TemplateBrowserProps {
    /// Called with the chosen template's image URL when the user confirms a
    /// selection in the modal. The URL is handed off by value; the browser
    /// keeps no tie to it afterwards.
    pub on_select: Callback<String>,

    /// Called when the user leaves the browser without picking anything.
    pub on_back: Callback<()>,
}
