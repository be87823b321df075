pub mod common;
pub mod compare;
pub mod distance;
pub mod filetype;
pub mod hash;
pub mod triage;
