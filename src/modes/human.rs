use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};
use tracing::info;

use crate::game::{GameConfig, GameEngine, GameSession, TickSchedule, TimerHandle};
use crate::input::{InputHandler, KeyAction};
use crate::render::{Renderer, TuiSurface};
use crate::score::ScoreBoard;
use crate::store::KeyValueStore;

/// Tokio interval currently standing in for the session's active timer
type TickTimer = Option<(TimerHandle, Interval)>;

pub struct HumanMode {
    session: GameSession<TickSchedule>,
    surface: TuiSurface,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, store: Box<dyn KeyValueStore>) -> Self {
        let surface = TuiSurface::new(config.grid());
        let scores = ScoreBoard::new(store, config.best_score_key.clone());
        let engine = GameEngine::new(config);

        Self {
            session: GameSession::new(engine, scores, TickSchedule::new()),
            surface,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        info!("terminal_ready");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;
        info!(best = self.session.best_score(), "quit");

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        self.session.restart(&mut self.surface);
        let mut tick_timer: TickTimer = None;
        sync_timer(&mut tick_timer, self.session.scheduler());

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                handle = next_tick(&mut tick_timer) => {
                    self.session.tick(handle, &mut self.surface);
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.surface);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            sync_timer(&mut tick_timer, self.session.scheduler());
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.session.on_key_press(direction);
                }
                KeyAction::Restart => {
                    self.session.restart(&mut self.surface);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Makes `timer` mirror the schedule: a new handle gets a fresh interval
/// whose first tick is one period away, a cancelled one stops ticking.
fn sync_timer(timer: &mut TickTimer, schedule: &TickSchedule) {
    let current = timer.as_ref().map(|(handle, _)| *handle);
    match schedule.active() {
        Some((handle, _)) if current == Some(handle) => {}
        Some((handle, period)) => {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            *timer = Some((handle, ticks));
        }
        None => *timer = None,
    }
}

async fn next_tick(timer: &mut TickTimer) -> TimerHandle {
    match timer {
        Some((handle, ticks)) => {
            ticks.tick().await;
            *handle
        }
        None => std::future::pending().await,
    }
}
