pub mod client;
pub mod facade_sink;
pub mod file_sink;
pub mod interface;
pub mod level;
pub mod none_sink;
pub mod receiver;
pub mod record;
pub mod sink;
