use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_failure::RenderFailure;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Progress { generation: u64, percent: u8 },
    Frame(FrameData),
    Error(RenderFailure),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Progress { generation, .. } => *generation,
            Self::Frame(frame) => frame.generation,
            Self::Error(failure) => failure.generation,
        }
    }
}
