pub mod colombia;
pub mod distance_table;
pub mod error;
pub mod json;
pub mod kilometers;
pub mod provider;
