use crate::controllers::interactive::data::frame_data::FrameData;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Unconfigured,
    Configured,
    Rendering { generation: u64 },
    Rendered { frame: FrameData },
}

impl SessionState {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unconfigured => "unconfigured",
            Self::Configured => "configured",
            Self::Rendering { .. } => "rendering",
            Self::Rendered { .. } => "rendered",
        }
    }

    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Rendering { .. } | Self::Rendered { .. })
    }
}
