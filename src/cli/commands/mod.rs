pub mod audit;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod recent;
pub mod record;
pub mod roster;
pub mod search;
pub mod watch;
