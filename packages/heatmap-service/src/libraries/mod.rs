pub mod grid_aggregator;
