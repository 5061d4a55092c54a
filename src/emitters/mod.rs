// Copyright @yucwang 2026

pub mod constant;
pub mod directional;
pub mod envmap;
pub mod lambertian;
pub mod point;
