pub mod controller;
pub mod dto;
pub(crate) mod mapper;
