use crate::controllers::interactive::events::render_event::RenderEvent;

pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
