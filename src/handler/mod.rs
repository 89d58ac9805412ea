pub mod index;
pub mod send_log;
