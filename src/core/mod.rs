pub mod audit;
pub mod calculator;
pub mod config;
pub mod del;
pub mod edit;
pub mod fallback;
pub mod logic;
pub mod record;
pub mod roster;
pub mod search;
