//! The tick loop: input, steering, engine step, render, present, wait.

use alloc::format;

use tracing::{debug, info};
use uefi_snake_core::{GameState, Step, StepError};
use uefi_snake_gfx::{Compositor, Display, EncodedImage, GridLayout, ImageDecoder, SceneRenderer};
use uefi_snake_input::{drain_latest, Polled};

use crate::config::LoopConfig;
use crate::error::EngineError;
use crate::host::Firmware;
use crate::types::{Direction, GameStatus, Outcome};

/// Result of a single [`GameLoop::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Finished(Outcome),
}

/// One game instance plus everything needed to drive it tick by tick.
#[derive(Debug, Clone)]
pub struct GameLoop {
    game: GameState,
    heading: Direction,
    scene: SceneRenderer,
    config: LoopConfig,
    ticks: u64,
}

impl GameLoop {
    /// Set up a fresh game sized for the compositor's display.
    ///
    /// Fails if the grid does not fit on the display.
    pub fn new<D: Display>(config: LoopConfig, compositor: &Compositor<D>) -> Result<Self, EngineError> {
        let (width, height) = compositor.resolution();
        let layout = GridLayout::compute(width, height, config.cell_occupancy_percent)?;
        info!(
            width,
            height,
            cell = layout.cell_size,
            side = layout.side,
            "grid layout"
        );

        Ok(Self {
            game: GameState::new(config.seed),
            heading: config.initial_heading,
            scene: SceneRenderer::new(layout),
            config,
            ticks: 0,
        })
    }

    /// Show `logo` on the splash frame and behind the grid.
    pub fn with_logo(mut self, logo: EncodedImage<'static>) -> Self {
        self.scene = self.scene.with_logo(logo);
        self
    }

    /// Continue from a prepared game instead of a fresh one.
    ///
    /// The heading follows the snake's neck-to-head step; a one-cell snake
    /// keeps the configured initial heading.
    pub fn with_game(mut self, game: GameState) -> Self {
        self.heading = game.snake().heading().unwrap_or(self.config.initial_heading);
        self.game = game;
        self
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn scene(&self) -> &SceneRenderer {
        &self.scene
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apply a requested direction unless it is a 180° turn.
    ///
    /// Returns whether the heading is now `requested`.
    pub fn steer(&mut self, requested: Direction) -> bool {
        if requested.is_reverse_of(self.heading) {
            return false;
        }
        self.heading = requested;
        true
    }

    /// Present the logo on a cleared screen and hold it for the splash delay.
    pub fn splash<F, D, I>(
        &self,
        fw: &mut F,
        compositor: &mut Compositor<D>,
        decoder: &I,
    ) -> Result<(), EngineError>
    where
        F: Firmware + ?Sized,
        D: Display,
        I: ImageDecoder,
    {
        if self.config.splash_delay_us == 0 {
            return Ok(());
        }

        self.scene.draw_backdrop(compositor, decoder)?;
        compositor.present()?;
        fw.stall(self.config.splash_delay_us);
        Ok(())
    }

    /// Run one tick. Does not wait afterwards; [`GameLoop::run`] does.
    pub fn tick<F, D, I>(
        &mut self,
        fw: &mut F,
        compositor: &mut Compositor<D>,
        decoder: &I,
    ) -> Result<Tick, EngineError>
    where
        F: Firmware + ?Sized,
        D: Display,
        I: ImageDecoder,
    {
        self.ticks += 1;

        match drain_latest(fw, self.config.input_drain_limit) {
            Polled::Quit => {
                info!(ticks = self.ticks, "escape pressed");
                return Ok(Tick::Finished(Outcome::Aborted));
            }
            Polled::Steer(requested) => {
                if !self.steer(requested) {
                    debug!(%requested, heading = %self.heading, "reverse turn ignored");
                }
            }
            Polled::Idle => {}
        }

        let step = match self.game.advance(self.heading) {
            Ok(step) => step,
            Err(StepError::SelfCollision { .. }) => {
                fw.print(&format!(
                    "\nGame Over! You died!\nScore: {}\nExiting in {} seconds...\n",
                    self.game.score(),
                    self.end_delay_secs()
                ));
                fw.stall(self.config.end_delay_us);
                return Ok(Tick::Finished(Outcome::Lost));
            }
            Err(StepError::Finished(status)) => {
                return Ok(Tick::Finished(outcome_of(status)));
            }
        };

        self.scene.render(&self.game, compositor, decoder)?;
        compositor.present()?;
        debug!(
            tick = self.ticks,
            head = self.game.head(),
            length = self.game.snake().len(),
            score = self.game.score(),
            "frame presented"
        );

        fw.home();
        fw.print(&format!(
            "\n\nScore: {}\nDirection: {}\n",
            self.game.score(),
            self.heading
        ));

        if step == Step::Won {
            fw.print(&format!(
                "\nCongratulations! You've won!\nScore: {}\nExiting in {} seconds...\n",
                self.game.score(),
                self.end_delay_secs()
            ));
            fw.stall(self.config.end_delay_us);
            return Ok(Tick::Finished(Outcome::Won));
        }

        Ok(Tick::Continue)
    }

    /// Splash, then tick until the game ends or escape is pressed.
    pub fn run<F, D, I>(
        &mut self,
        fw: &mut F,
        compositor: &mut Compositor<D>,
        decoder: &I,
    ) -> Result<Outcome, EngineError>
    where
        F: Firmware + ?Sized,
        D: Display,
        I: ImageDecoder,
    {
        self.splash(fw, compositor, decoder)?;

        loop {
            match self.tick(fw, compositor, decoder)? {
                Tick::Continue => fw.stall(self.config.tick_us),
                Tick::Finished(outcome) => {
                    info!(?outcome, score = self.game.score(), ticks = self.ticks, "game finished");
                    return Ok(outcome);
                }
            }
        }
    }

    fn end_delay_secs(&self) -> u64 {
        self.config.end_delay_us / 1_000_000
    }
}

fn outcome_of(status: GameStatus) -> Outcome {
    match status {
        GameStatus::Won => Outcome::Won,
        GameStatus::Lost => Outcome::Lost,
        GameStatus::Running => Outcome::Aborted,
    }
}
