// Domain layer - Core types and parameter rules

pub mod model;
pub mod rules;
