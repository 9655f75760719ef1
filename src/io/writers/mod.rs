pub mod browserconfig;
pub mod ico;
pub mod manifest;
