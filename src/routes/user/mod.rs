pub mod create;
pub mod logout;
pub mod me;
pub mod token;
