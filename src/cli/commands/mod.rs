pub mod clear;
pub mod download;
pub mod home;
pub mod results;
pub mod upload;
