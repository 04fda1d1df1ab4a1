pub mod account;
pub mod category;
pub mod notification;
pub mod transaction;
