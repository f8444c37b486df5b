#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the query input box.
    InputChanged(String),
    /// User pressed Enter in the query input. Always submits.
    QuerySubmitted,
    /// User activated the Search button. Ignored while a request is pending.
    SearchClicked,
    /// The search API resolved a request.
    SearchCompleted {
        request_id: crate::RequestId,
        outcome: crate::SearchOutcome,
    },
    /// User selected a result row.
    ResultSelected { index: usize },
    /// Move the selection one row down.
    SelectNext,
    /// Move the selection one row up.
    SelectPrevious,
    /// User asked to open the selected result.
    OpenSelectedResult,
}
