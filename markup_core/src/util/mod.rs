pub mod buffer_queue;
pub mod smallcharset;
