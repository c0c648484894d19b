pub mod attendance;
pub mod photo_list;
pub mod photo_upload;
