//! One player's game from start to finish, and every restart after it.
//!
//! `Idle -> Running -> {GameOver, Victory}`; a terminal state only leaves via
//! [`GameSession::restart`], which cancels the running timer, rebuilds all
//! transient state and schedules a fresh timer.

use tracing::{debug, info};

use super::{
    action::Direction,
    engine::{GameEngine, check_collision, check_victory},
    scheduler::{Scheduler, TickSchedule, TimerHandle},
    state::{GameState, GameStatus},
};
use crate::render::surface::{
    FOOD_COLOR, RenderSurface, SNAKE_BORDER_COLOR, SNAKE_COLOR, StatusSurface,
};
use crate::score::ScoreBoard;

pub struct GameSession<S: Scheduler = TickSchedule> {
    engine: GameEngine,
    state: GameState,
    scores: ScoreBoard,
    scheduler: S,
    timer: Option<TimerHandle>,
}

impl<S: Scheduler> GameSession<S> {
    /// A session waiting for its first [`restart`](Self::restart).
    pub fn new(mut engine: GameEngine, scores: ScoreBoard, scheduler: S) -> Self {
        let state = engine.reset();
        Self {
            engine,
            state,
            scores,
            scheduler,
            timer: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn best_score(&self) -> u32 {
        self.scores.best()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Handle of the timer this session currently listens to
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// Start a new game, discarding whatever was in progress.
    pub fn restart<D: RenderSurface + StatusSurface>(&mut self, display: &mut D) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }

        self.state = self.engine.reset();
        self.scores.reset();
        self.state.status = GameStatus::Running;

        display.set_score_text(self.scores.score());
        display.set_best_score_text(self.scores.best());
        display.hide_overlays();
        self.paint(display);

        let interval = self.engine.config().tick_interval();
        let handle = self.scheduler.schedule(interval);
        self.timer = Some(handle);

        info!(
            timer = handle.id(),
            best = self.scores.best(),
            food_x = self.state.food.x,
            food_y = self.state.food.y,
            "game_started"
        );
    }

    /// Buffer a steering key for a later tick. Returns whether it was queued.
    pub fn on_key_press(&mut self, direction: Direction) -> bool {
        let accepted = self.state.input.on_key_press(direction);
        if !accepted {
            debug!(?direction, last = ?self.state.input.last_accepted(), "reversal_ignored");
        }
        accepted
    }

    /// Run one simulation step for the timer behind `handle`.
    ///
    /// Ticks from a cancelled timer, or arriving after the game ended, change
    /// nothing.
    pub fn tick<D: RenderSurface + StatusSurface>(
        &mut self,
        handle: TimerHandle,
        display: &mut D,
    ) -> GameStatus {
        if self.timer != Some(handle) || self.state.status != GameStatus::Running {
            debug!(timer = handle.id(), status = ?self.state.status, "stale_tick");
            return self.state.status;
        }

        let info = self.engine.step(&mut self.state);
        if info.turned {
            debug!(direction = ?self.state.direction, "turned");
        }

        if info.ate_food {
            let new_best = self.scores.record_eat();
            display.set_score_text(self.scores.score());
            if new_best {
                display.set_best_score_text(self.scores.best());
            }
            debug!(
                score = self.scores.score(),
                length = self.state.snake.len(),
                "food_eaten"
            );
        }

        self.paint(display);

        let grid = *self.engine.grid();
        if check_collision(&self.state.snake) {
            self.halt(GameStatus::GameOver);
            display.show_game_over();
        } else if check_victory(&self.state.snake, &grid) || !info.food_placed {
            self.halt(GameStatus::Victory);
            display.show_victory();
        }

        self.state.status
    }

    fn halt(&mut self, status: GameStatus) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
        self.state.status = status;
        info!(
            ?status,
            score = self.scores.score(),
            best = self.scores.best(),
            steps = self.state.steps,
            "game_finished"
        );
    }

    fn paint<D: RenderSurface>(&self, display: &mut D) {
        let size = self.engine.grid().cell_size;
        display.clear();
        for &segment in &self.state.snake.body {
            display.draw_filled_rect(segment, size, SNAKE_COLOR);
            display.draw_rect_outline(segment, size, SNAKE_BORDER_COLOR);
        }
        display.draw_filled_rect(self.state.food, size, FOOD_COLOR);
    }
}
