use crate::controllers::session::state::SessionState;
use crate::core::actions::render::errors::RenderError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("cannot {operation} while {state}")]
    InvalidTransition {
        operation: &'static str,
        state: &'static str,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl SessionError {
    pub(crate) fn invalid(operation: &'static str, state: &SessionState) -> Self {
        Self::InvalidTransition {
            operation,
            state: state.name(),
        }
    }
}
