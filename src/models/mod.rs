pub mod template;
pub mod ugc_post;
pub mod user;
