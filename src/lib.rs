pub mod connect_four;
pub mod engine;
pub mod prelude;
