//! SeaORM entity definitions

pub mod user;
