pub mod point_store;
