pub mod calculate;
pub mod dispatch;
pub mod equipment;
pub mod manufacturers;
pub mod schema;
pub mod screening;
pub mod shared;
