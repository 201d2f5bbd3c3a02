pub mod cohort;
pub mod comparator;
pub mod normalizer;
pub mod overview;
pub mod statistics;
