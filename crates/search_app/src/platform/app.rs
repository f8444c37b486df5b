use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use client_logging::{client_info, client_warn};
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use ratatui::crossterm::execute;
use ratatui::widgets::ListState;
use ratatui::DefaultTerminal;
use search_core::{update, AppState, Msg};
use search_engine::EngineHandle;

use super::config::ClientConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{map_key, map_mouse, UiAction};
use super::ui::layout::ScreenLayout;
use super::ui::render;

const INPUT_POLL: Duration = Duration::from_millis(50);

pub fn run_app() -> Result<()> {
    let config = ClientConfig::from_env();
    logging::initialize(config.log_destination, config.log_level);
    for warning in &config.warnings {
        client_warn!("{}", warning);
    }
    client_info!(
        "Search client starting base_url={} timeout={:?} log_level={}",
        config.api.base_url,
        config.api.request_timeout,
        config.log_level
    );

    let engine = EngineHandle::new(config.api)?;
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(engine, msg_tx);
    let mut app = App::new(effects, msg_rx);

    let mut terminal = ratatui::init();
    if let Err(err) = execute!(stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(err.into());
    }

    let result = app.run(&mut terminal);

    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    client_info!("Search client exiting");
    result
}

struct App {
    state: AppState,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    layout: ScreenLayout,
    list_state: ListState,
}

impl App {
    fn new(effects: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        Self {
            state: AppState::new(),
            effects,
            msg_rx,
            layout: ScreenLayout::default(),
            list_state: ListState::default(),
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut needs_draw = true;
        loop {
            if needs_draw {
                self.draw(terminal)?;
            }

            needs_draw = false;
            if event::poll(INPUT_POLL)? {
                let actions = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        map_key(key, self.state.query())
                    }
                    Event::Mouse(mouse) => map_mouse(
                        mouse,
                        &self.layout,
                        self.list_state.offset(),
                        self.state.results().len(),
                    ),
                    Event::Resize(_, _) => {
                        needs_draw = true;
                        Vec::new()
                    }
                    _ => Vec::new(),
                };
                for action in actions {
                    match action {
                        UiAction::Dispatch(msg) => self.dispatch_msg(msg),
                        UiAction::Quit => return Ok(()),
                    }
                }
            }

            self.process_pending_messages();
            needs_draw |= self.state.consume_dirty();
        }
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let view = self.state.view();
        terminal.draw(|frame| {
            self.layout = ScreenLayout::new(frame.area());
            render::draw(frame, &view, &self.layout, &mut self.list_state);
        })?;
        Ok(())
    }

    /// Drains engine completions. Each one is applied as it arrives, so the
    /// last to resolve wins.
    fn process_pending_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
    }
}
