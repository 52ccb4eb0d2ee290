#[macro_use]
pub mod macros;

pub mod akleg;
pub mod api;
pub mod fs_json_util;
