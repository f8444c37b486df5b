pub const APP_TITLE: &str = "Space Biology Knowledge Engine";
pub const APP_HINT: &str = "Hybrid search across pgvector (rich) and qdrant (summaries). Use \"summary\" to bias toward summaries. Optional keyword filter: kw:bone";
pub const INPUT_TITLE: &str = "Query";
pub const INPUT_PLACEHOLDER: &str = "Type a query...";
pub const RESULTS_TITLE: &str = "Results";
pub const KEY_HINTS: &str = " Enter search | Up/Down select | Ctrl+O open | Ctrl+U clear | Esc quit ";

pub const HEADER_HEIGHT: u16 = 2;
pub const INPUT_HEIGHT: u16 = 3;
pub const BUTTON_WIDTH: u16 = 16;
pub const STATUS_HEIGHT: u16 = 1;
/// Lines per result: heading, url, display text.
pub const RESULT_ROW_HEIGHT: u16 = 3;
