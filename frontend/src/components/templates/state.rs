//! Component state for the template browser.
//!
//! The browsing state proper (search, category, page, selection) lives in the
//! pure `browse` module; this struct binds it to the loaded catalog and the
//! derived category list for the component's lifetime.

use common::model::template::TemplateRecord;

use super::browse::{self, BrowserState, SelectionState};

pub struct TemplateBrowser {
    /// The immutable catalog. Empty when loading failed; the view then shows
    /// an empty state instead of a grid.
    pub catalog: &'static [TemplateRecord],

    /// Search term, selected category and current page.
    pub browse: BrowserState,

    /// Distinct categories behind the `All` sentinel, derived once at mount.
    /// The catalog never changes after load, so this never goes stale.
    pub categories: Vec<String>,

    /// Pending selection and the confirmation modal flag.
    pub selection: SelectionState,
}

impl TemplateBrowser {
    pub fn new() -> Self {
        let catalog = match crate::catalog::shared() {
            Ok(catalog) => catalog,
            Err(err) => {
                gloo_console::error!(format!("Could not load the template catalog: {}", err));
                &[]
            }
        };

        Self {
            catalog,
            browse: BrowserState::default(),
            categories: browse::categories(catalog),
            selection: SelectionState::default(),
        }
    }
}
