pub mod address;
pub mod requests;
pub mod response;
