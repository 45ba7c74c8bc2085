// Adapters layer: filesystem storage and table file formats.

pub mod storage;
pub mod table_io;
