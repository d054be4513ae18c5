pub mod warehouse;

pub use warehouse::Warehouse;
