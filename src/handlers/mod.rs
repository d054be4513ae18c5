pub mod warehouses;
