//! Terminal frontend: event loop, input, and rendering.

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use taskdeck_client::{Task, TaskClient};
use taskdeck_core::{Config, FlagStore};

use crate::composer::TaskComposer;
use crate::controller::AppController;
use crate::list_view::{self, TaskListView};
use crate::service::TaskServiceMessage;

mod input;
mod render;
mod theme;

pub use theme::Theme;

/// Which pane receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Composer,
}

/// Top-level TUI state.
pub struct App {
    pub controller: AppController,
    pub composer: TaskComposer,
    pub list: TaskListView,
    pub flags: FlagStore,
    pub theme: Theme,
    pub focus: Focus,
    /// Cursor index into the display order.
    pub cursor: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(flags: FlagStore, controller: AppController) -> Self {
        let theme = Theme::from_flags(&flags);
        App {
            controller,
            composer: TaskComposer::new(),
            list: TaskListView::new(),
            flags,
            theme,
            focus: Focus::List,
            cursor: 0,
            should_quit: false,
        }
    }

    /// Current display order (indices into the base collection).
    pub fn display_order(&self) -> Vec<usize> {
        list_view::display_order(self.controller.tasks(), &self.flags)
    }

    /// The task under the cursor, in display order.
    pub fn selected_task(&self) -> Option<&Task> {
        let order = self.display_order();
        order.get(self.cursor).map(|&i| &self.controller.tasks()[i])
    }

    fn clamp_cursor(&mut self) {
        let len = self.controller.tasks().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

/// Run the terminal application until the user quits.
pub fn run(config: Config, runtime: tokio::runtime::Handle) -> Result<()> {
    let client = Arc::new(TaskClient::new(&config.api_base_url)?);
    let (tx, rx) = mpsc::channel();

    let mut controller = AppController::new(client, runtime, tx);
    // Initial load happens once, before the first frame.
    controller.refresh();

    config.flags.log_snapshot();
    let mut app = App::new(config.flags.clone(), controller);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, &rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &Receiver<TaskServiceMessage>,
) -> Result<()> {
    loop {
        // Apply any completed service responses before drawing, so
        // the UI stays interactive while requests are in flight.
        app.controller.pump(rx);
        app.clamp_cursor();

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
