pub mod entity;
pub mod view;
