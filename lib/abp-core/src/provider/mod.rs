pub mod environment;
pub mod http_client;
pub mod rest;
