pub mod calculator;
pub mod cli;
pub mod logging;
pub mod session;
