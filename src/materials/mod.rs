// Copyright @yucwang 2023

pub mod conductor;
pub mod dielectric;
pub mod diffuse;
pub mod microfacet;
pub mod principled;
pub mod roughconductor;
