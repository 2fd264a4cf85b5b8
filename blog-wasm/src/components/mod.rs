pub(crate) mod create_post;
pub(crate) mod image_picker;
pub(crate) mod navbar;
pub(crate) mod notices;
