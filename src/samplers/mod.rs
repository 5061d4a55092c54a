// Copyright @yucwang 2026

pub mod halton;
pub mod independent;
