pub mod controller;
pub mod navigator;
