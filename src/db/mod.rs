pub mod audit;
pub mod initialize;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod store;
pub mod students;
