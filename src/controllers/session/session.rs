use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::session::errors::SessionError;
use crate::controllers::session::ports::render_request_port::RenderRequestPort;
use crate::controllers::session::state::SessionState;
use crate::core::actions::navigate::{map_click_to_viewport, reset};
use crate::core::actions::render::errors::RenderError;
use crate::core::data::point::Point;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;

/// Tracks what a front end is showing and submits exactly one render per
/// change of inputs.
///
/// Frames come back asynchronously; feed them in with [`FractalSession::apply`]
/// (or [`complete`](FractalSession::complete) / [`fail`](FractalSession::fail)).
/// Only the generation of the most recent submission is ever accepted.
pub struct FractalSession<P: RenderRequestPort> {
    port: P,
    request: RenderRequest,
    state: SessionState,
}

impl<P: RenderRequestPort> FractalSession<P> {
    pub fn new(port: P) -> Self {
        Self {
            port,
            request: RenderRequest::default(),
            state: SessionState::Unconfigured,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> RenderConfig {
        self.request.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.request.viewport
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameData> {
        match &self.state {
            SessionState::Rendered { frame } => Some(frame),
            _ => None,
        }
    }

    pub fn configure(
        &mut self,
        config: RenderConfig,
        viewport: Viewport,
    ) -> Result<Option<u64>, SessionError> {
        validate(&config, &viewport)?;

        let request = RenderRequest { config, viewport };

        if !self.state.is_generated() {
            self.request = request;
            self.state = SessionState::Configured;
            return Ok(None);
        }

        if request == self.request {
            return Ok(None);
        }

        self.request = request;

        Ok(Some(self.submit()))
    }

    pub fn generate(&mut self) -> Result<u64, SessionError> {
        match self.state {
            SessionState::Configured => Ok(self.submit()),
            ref other => Err(SessionError::invalid("generate", other)),
        }
    }

    pub fn regenerate(&mut self) -> Result<u64, SessionError> {
        match self.state {
            SessionState::Unconfigured => {
                Err(SessionError::invalid("regenerate", &self.state))
            }
            _ => Ok(self.submit()),
        }
    }

    pub fn click(&mut self, point: Point) -> Result<u64, SessionError> {
        if !self.state.is_generated() {
            return Err(SessionError::invalid("click", &self.state));
        }

        let config = self.request.config;
        self.request.viewport =
            map_click_to_viewport(point, config.width, config.height, self.request.viewport)?;

        Ok(self.submit())
    }

    pub fn reset(&mut self) -> Option<u64> {
        let (viewport, config) = reset();
        let request = RenderRequest { config, viewport };

        if request == self.request {
            return None;
        }

        self.request = request;

        self.state.is_generated().then(|| self.submit())
    }

    pub fn delete(&mut self) {
        self.state = SessionState::Unconfigured;
    }

    pub fn complete(&mut self, frame: FrameData) -> bool {
        match self.state {
            SessionState::Rendering { generation } if generation == frame.generation => {
                self.state = SessionState::Rendered { frame };
                true
            }
            _ => {
                log::debug!("ignoring frame {} in {} session", frame.generation, self.state.name());
                false
            }
        }
    }

    pub fn fail(&mut self, generation: u64) -> bool {
        match self.state {
            SessionState::Rendering { generation: pending } if pending == generation => {
                self.state = SessionState::Configured;
                true
            }
            _ => false,
        }
    }

    pub fn apply(&mut self, event: RenderEvent) -> bool {
        match event {
            RenderEvent::Progress { .. } => false,
            RenderEvent::Frame(frame) => self.complete(frame),
            RenderEvent::Error(failure) => self.fail(failure.generation),
        }
    }

    fn submit(&mut self) -> u64 {
        let generation = self.port.submit(self.request);
        log::debug!(
            "submitted render {generation} at ({}, {}) zoom {}",
            self.request.viewport.center_x,
            self.request.viewport.center_y,
            self.request.viewport.zoom
        );
        self.state = SessionState::Rendering { generation };

        generation
    }
}

fn validate(config: &RenderConfig, viewport: &Viewport) -> Result<(), RenderError> {
    viewport
        .validate()
        .map_err(RenderError::from)
        .and_then(|()| config.validate().map_err(RenderError::from))
        .inspect_err(|err| log::warn!("rejecting session inputs: {err}"))
}
