pub mod growth;

pub use growth::{GrowthBasis, GrowthSuggestion, SectorLimit};
