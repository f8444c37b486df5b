use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use search_core::Msg;

use super::layout::ScreenLayout;

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Dispatch(Msg),
    Quit,
}

/// Maps a key press to actions. `query` is the current input text; edits
/// produce the full replacement text.
pub fn map_key(key: KeyEvent, query: &str) -> Vec<UiAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Esc => UiAction::Quit,
        KeyCode::Char('c') if ctrl => UiAction::Quit,
        KeyCode::Char('u') if ctrl => UiAction::Dispatch(Msg::InputChanged(String::new())),
        KeyCode::Char('o') if ctrl => UiAction::Dispatch(Msg::OpenSelectedResult),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {
            return Vec::new()
        }
        KeyCode::Char(ch) => {
            let mut next = query.to_string();
            next.push(ch);
            UiAction::Dispatch(Msg::InputChanged(next))
        }
        KeyCode::Backspace => {
            let mut next = query.to_string();
            if next.pop().is_none() {
                return Vec::new();
            }
            UiAction::Dispatch(Msg::InputChanged(next))
        }
        KeyCode::Enter => UiAction::Dispatch(Msg::QuerySubmitted),
        KeyCode::Up => UiAction::Dispatch(Msg::SelectPrevious),
        KeyCode::Down => UiAction::Dispatch(Msg::SelectNext),
        _ => return Vec::new(),
    };
    vec![action]
}

/// Maps a left click to actions: the button submits, a result row is
/// selected and opened. Empty space in the results panel does nothing.
pub fn map_mouse(
    mouse: MouseEvent,
    layout: &ScreenLayout,
    list_offset: usize,
    result_count: usize,
) -> Vec<UiAction> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Vec::new();
    }
    if layout.button_contains(mouse.column, mouse.row) {
        return vec![UiAction::Dispatch(Msg::SearchClicked)];
    }
    match layout.result_index_at(mouse.column, mouse.row, list_offset, result_count) {
        Some(index) => vec![
            UiAction::Dispatch(Msg::ResultSelected { index }),
            UiAction::Dispatch(Msg::OpenSelectedResult),
        ],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use search_core::{update, AppState, SearchOutcome, SearchResult};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn typing_appends_and_backspace_removes() {
        assert_eq!(
            map_key(press(KeyCode::Char('s')), "bone"),
            vec![UiAction::Dispatch(Msg::InputChanged("bones".to_string()))]
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace), "bone"),
            vec![UiAction::Dispatch(Msg::InputChanged("bon".to_string()))]
        );
        assert!(map_key(press(KeyCode::Backspace), "").is_empty());
    }

    #[test]
    fn control_keys() {
        assert_eq!(map_key(ctrl('c'), "q"), vec![UiAction::Quit]);
        assert_eq!(map_key(press(KeyCode::Esc), "q"), vec![UiAction::Quit]);
        assert_eq!(
            map_key(ctrl('u'), "q"),
            vec![UiAction::Dispatch(Msg::InputChanged(String::new()))]
        );
        assert_eq!(
            map_key(ctrl('o'), "q"),
            vec![UiAction::Dispatch(Msg::OpenSelectedResult)]
        );
        assert!(map_key(ctrl('x'), "q").is_empty());
    }

    #[test]
    fn enter_and_arrows() {
        assert_eq!(
            map_key(press(KeyCode::Enter), ""),
            vec![UiAction::Dispatch(Msg::QuerySubmitted)]
        );
        assert_eq!(
            map_key(press(KeyCode::Up), ""),
            vec![UiAction::Dispatch(Msg::SelectPrevious)]
        );
        assert_eq!(
            map_key(press(KeyCode::Down), ""),
            vec![UiAction::Dispatch(Msg::SelectNext)]
        );
    }

    #[test]
    fn clicks_hit_button_and_rows() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));

        assert_eq!(
            map_mouse(click(70, 3), &layout, 0, 0),
            vec![UiAction::Dispatch(Msg::SearchClicked)]
        );
        assert_eq!(
            map_mouse(click(10, 10), &layout, 2, 5),
            vec![
                UiAction::Dispatch(Msg::ResultSelected { index: 3 }),
                UiAction::Dispatch(Msg::OpenSelectedResult),
            ]
        );
        assert!(map_mouse(click(10, 0), &layout, 0, 5).is_empty());
    }

    #[test]
    fn click_below_last_row_opens_nothing() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        let (state, _) = update(AppState::new(), Msg::QuerySubmitted);
        let (state, _) = update(
            state,
            Msg::SearchCompleted {
                request_id: 1,
                outcome: SearchOutcome::Results(vec![SearchResult {
                    source: "pgvector".to_string(),
                    title: "Only".to_string(),
                    url: "http://only".to_string(),
                    ..SearchResult::default()
                }]),
            },
        );
        assert_eq!(state.selected(), Some(0));

        let actions = map_mouse(click(10, 15), &layout, 0, state.results().len());

        let mut effects = Vec::new();
        let mut state = state;
        for action in actions {
            if let UiAction::Dispatch(msg) = action {
                let (next, mut produced) = update(state, msg);
                state = next;
                effects.append(&mut produced);
            }
        }
        assert!(effects.is_empty());
        assert_eq!(state.selected(), Some(0));
    }
}
