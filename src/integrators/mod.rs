// Copyright @yucwang 2026

pub mod albedo;
pub mod direct;
pub mod normals;
pub mod path;
