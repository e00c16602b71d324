pub mod file_store;
pub mod http_client;
pub mod input_collector;
pub mod pipeline;
pub mod renderer;
