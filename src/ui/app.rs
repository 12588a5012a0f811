//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::events::Event as WorkerEvent;
use crate::gateway::Gateway;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::EventSender;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub poll_interval_ms: u64,
}

impl UIConfig {
    pub fn new(with_background_color: bool, poll_interval_ms: u64) -> Self {
        Self {
            with_background_color,
            poll_interval_ms,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The dashboard itself.
    Dashboard,
}

/// What the loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state. Built up front so that no event is lost while the
    /// splash screen is showing.
    state: DashboardState,

    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Hands scan submissions their way back into the loop.
    event_sender: EventSender,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        gateway: Arc<dyn Gateway>,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        event_sender: EventSender,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            state: DashboardState::new(gateway, Instant::now(), ui_config),
            event_receiver,
            event_sender,
            shutdown_sender,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        // Handle exit events
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            let _ = self.shutdown_sender.send(());
            return KeyAction::Quit;
        }

        match self.current_screen {
            Screen::Splash => {
                // Any key press will skip the splash screen
                self.current_screen = Screen::Dashboard;
            }
            Screen::Dashboard => match key.code {
                KeyCode::Up => self.state.scan.selector.select_previous(),
                KeyCode::Down => self.state.scan.selector.select_next(),
                KeyCode::Enter | KeyCode::Char('s') => self.state.start_scan(&self.event_sender),
                _ => {}
            },
        }
        KeyAction::Continue
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.state.add_event(event);
        }

        app.state.update();
        terminal.draw(|f| render(f, app.current_screen, &app.state))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) == KeyAction::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, state: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, state),
    }
}
