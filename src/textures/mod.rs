// Copyright @yucwang 2026

pub mod checkerboard;
pub mod constant;
pub mod image;
