pub mod post_dtos;
pub mod template_dtos;
