// Domain layer - Core types, error taxonomy and policies

pub mod errors;
pub mod model;
pub mod rules;
