// Utils module - Utility functions

pub mod http_client;
