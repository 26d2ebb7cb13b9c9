pub mod video_list;
pub mod video_upload;
