pub mod caption_controls;
pub mod caption_editor;
pub mod video_player;
