pub mod footer;
pub mod icon;
pub mod navbar;
pub mod particles;
pub mod region_detail;
pub mod region_list;
pub mod region_map;
pub mod reveal;
pub mod whatsapp_fab;
