use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::ControllerError;
use crate::controllers::interactive::ports::display_surface::DisplaySurface;
use crate::controllers::interactive::ports::input_source::InputSource;
use crate::controllers::interactive::state::{ControllerState, ViewState, is_affirmative};
use crate::core::actions::render_mandelbrot::render_mandelbrot::render_mandelbrot;
use std::time::Instant;

/// What a finished session did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub frames_presented: u64,
}

/// Drives one explore session: render, present, ask, repeat.
///
/// Runs entirely on the calling thread. The only blocking calls are the reads on the input
/// source. Any error ends the session; the controller is left in
/// [`ControllerState::Terminated`].
pub struct InteractiveController<I: InputSource, D: DisplaySurface> {
    input: I,
    display: D,
    config: ExplorerConfig,
    state: ControllerState,
    generation: u64,
    frames_presented: u64,
}

impl<I: InputSource, D: DisplaySurface> InteractiveController<I, D> {
    /// Starts in [`ControllerState::Rendering`] with the default view, so the first frame is
    /// shown before any input is requested.
    pub fn new(input: I, display: D, config: ExplorerConfig) -> Result<Self, ControllerError> {
        let initial = ViewState::initial(&config)?;

        Ok(Self {
            input,
            display,
            config,
            state: ControllerState::Rendering(initial),
            generation: 0,
            frames_presented: 0,
        })
    }

    #[must_use]
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        matches!(self.state, ControllerState::Terminated)
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Steps until the session terminates.
    pub fn run(&mut self) -> Result<SessionSummary, ControllerError> {
        while !self.is_terminated() {
            self.step()?;
        }

        log::info!("Session finished after {} frame(s)", self.frames_presented);

        Ok(SessionSummary {
            frames_presented: self.frames_presented,
        })
    }

    /// Performs exactly one state transition.
    pub fn step(&mut self) -> Result<(), ControllerError> {
        let state = std::mem::replace(&mut self.state, ControllerState::Terminated);
        let from = state.name();

        self.state = match state {
            ControllerState::AwaitingInput => self.await_input()?,
            ControllerState::Rendering(view) => self.render(view)?,
            ControllerState::Presenting(frame) => self.present(frame)?,
            ControllerState::Terminated => ControllerState::Terminated,
        };

        log::trace!("{} -> {}", from, self.state.name());

        Ok(())
    }

    fn await_input(&mut self) -> Result<ControllerState, ControllerError> {
        let Some(view_input) = self.input.read_view()? else {
            log::info!("Input closed, ending session");
            return Ok(ControllerState::Terminated);
        };

        let view = ViewState::from_input(view_input, &self.config)?;

        log::debug!(
            "Zoom {} -> {}, {} iterations",
            view_input.zoom,
            view.viewport,
            view.max_iterations
        );

        Ok(ControllerState::Rendering(view))
    }

    fn render(&mut self, view: ViewState) -> Result<ControllerState, ControllerError> {
        let start = Instant::now();
        let pixel_buffer = render_mandelbrot(
            view.viewport,
            self.config.resolution,
            view.max_iterations,
            self.config.sweep,
        )?;
        let render_duration = start.elapsed();

        self.generation += 1;

        log::info!(
            "Rendered frame {} ({}, {} iterations, {} sweep) in {:?}",
            self.generation,
            self.config.resolution,
            view.max_iterations,
            self.config.sweep.display_name(),
            render_duration
        );

        Ok(ControllerState::Presenting(FrameData {
            generation: self.generation,
            pixel_buffer,
            render_duration,
            viewport: view.viewport,
            max_iterations: view.max_iterations,
        }))
    }

    fn present(&mut self, frame: FrameData) -> Result<ControllerState, ControllerError> {
        let status = frame.status_message();
        let is_initial_frame = frame.generation == 1;

        self.display.present(frame)?;
        self.display.show_status(&status)?;
        self.frames_presented += 1;

        if is_initial_frame {
            return Ok(ControllerState::AwaitingInput);
        }

        match self.input.read_continue()? {
            Some(answer) if is_affirmative(&answer, &self.config.affirmative_token) => {
                Ok(ControllerState::AwaitingInput)
            }
            Some(answer) => {
                log::info!("Stopping on answer {:?}", answer.trim());
                Ok(ControllerState::Terminated)
            }
            None => {
                log::info!("Input closed, ending session");
                Ok(ControllerState::Terminated)
            }
        }
    }
}
