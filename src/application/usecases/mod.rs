pub mod load_screen;
pub mod preview_link;
pub mod send_location;
