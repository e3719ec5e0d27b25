pub mod page_handlers;
pub mod post_handlers;
pub mod template_handlers;
