// src/types/mod.rs
pub mod profile;
pub mod response;

pub use profile::{ProfileAdvisory, ProfileFile, ProfileInput, RecommendationRequest};
pub use response::{JobRecommendation, RecommendationResponse};
