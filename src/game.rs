//! Frame loop orchestration
//!
//! `Game` owns the session and the score store. It turns real elapsed time
//! into fixed simulation ticks, feeds input in, and performs the side
//! effects the pure simulation asks for (saving a new best score).

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::*;
use crate::highscores::BestScore;
use crate::persistence::ScoreStore;
use crate::platform::{EventSource, InputEvent};
use crate::renderer::{FrameView, Renderer};
use crate::sim::{GameEvent, GameState, TickInput, Viewport, tick};

/// Game instance holding all state
pub struct Game<S: ScoreStore> {
    pub state: GameState,
    store: S,
    accumulator: f32,
    input: TickInput,
    running: bool,
}

impl<S: ScoreStore> Game<S> {
    /// New session; the best score comes from the store
    pub fn new(seed: u64, viewport: Viewport, store: S) -> Self {
        let best = store.load().best_score;
        Self {
            state: GameState::new(seed, viewport, best),
            store,
            accumulator: 0.0,
            input: TickInput::default(),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved(pos) => self.input.pointer = Some(pos),
            InputEvent::Restart => {
                if self.state.is_over() {
                    self.input.restart = true;
                }
            }
            InputEvent::Quit => {
                log::info!("Quit requested");
                self.running = false;
            }
        }
    }

    /// Run simulation ticks for `dt` seconds of real time
    pub fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // One-shot inputs are consumed by the first tick
            self.input.restart = false;
            self.input.pointer = None;

            self.process_events();
        }
    }

    fn process_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::NewBest { score } => self.persist_best(score),
                GameEvent::GameOver { cause, score } => {
                    log::info!("Run ended by {:?} at score {}", cause, score);
                }
                GameEvent::LifeLost { remaining } => log::debug!("Life lost, {} left", remaining),
                GameEvent::Sliced { .. } | GameEvent::Combo { .. } => {}
            }
        }
    }

    /// Single write attempt; failure is logged and play continues
    fn persist_best(&mut self, score: u64) {
        log::info!("New best score: {}", score);
        if let Err(e) = self.store.save(&BestScore::new(score)) {
            log::error!("{}", e);
        }
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView::new(&self.state)
    }
}

/// Drive a game in real time until the event source asks to quit.
///
/// Each frame drains all pending input, advances the simulation, renders,
/// then sleeps out the rest of the 60 Hz frame.
pub fn run_loop<S, E, R>(game: &mut Game<S>, events: &mut E, renderer: &mut R)
where
    S: ScoreStore,
    E: EventSource,
    R: Renderer,
{
    let frame = Duration::from_secs_f32(SIM_DT);
    let start = Instant::now();
    let mut last = start;

    while game.is_running() {
        let frame_start = Instant::now();
        let now_secs = frame_start.duration_since(start).as_secs_f64();

        for event in events.poll(now_secs, game.state.is_over()) {
            game.handle_event(event);
        }
        if !game.is_running() {
            break;
        }

        let dt = frame_start.duration_since(last).as_secs_f32();
        last = frame_start;
        game.update(dt);
        renderer.render(&game.view());

        if let Some(remaining) = frame.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
