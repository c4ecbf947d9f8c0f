pub mod general_handlers;
pub mod post_handlers;
