mod start;
mod utils;
mod vehicle;
