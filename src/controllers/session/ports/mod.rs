pub mod render_request_port;
