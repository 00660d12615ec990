use common::model::template::TemplateRecord;

#[derive(Clone)]
pub enum Msg {
    SetSearchTerm(String),
    SetCategory(String),
    GoToPage(usize),
    SelectTemplate(TemplateRecord),
    CancelSelection,
    ConfirmSelection,
}
