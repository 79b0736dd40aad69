use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::render_request::RenderRequest;

pub trait RenderRequestPort {
    fn submit(&self, request: RenderRequest) -> u64;
}

impl RenderRequestPort for InteractiveController {
    fn submit(&self, request: RenderRequest) -> u64 {
        self.submit_request(request)
    }
}

impl<P: RenderRequestPort + ?Sized> RenderRequestPort for &P {
    fn submit(&self, request: RenderRequest) -> u64 {
        (**self).submit(request)
    }
}
