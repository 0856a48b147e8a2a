pub mod game_image;
pub mod overlay;
pub mod pagination;
pub mod status;
pub mod toast_stack;
