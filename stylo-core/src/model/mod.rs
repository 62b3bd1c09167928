//! Text models and their comparison.
//!
//! This module provides:
//! - Frequency distributions and their log similarity score (`FrequencyDistribution`)
//! - The five tracked features and their fixed order (`Feature`)
//! - Text fingerprints built from raw text or files (`TextModel`)
//! - Score vectors and the per-feature majority vote (`Classification`)

/// Key to count mapping shared by all features, with the log similarity score.
pub mod distribution;

/// The five features and their storage names.
pub mod feature;

/// Text fingerprint: feature extraction, merging, scoring and classification.
pub mod text_model;

/// Score vectors, vote counting and classification results.
pub mod classification;
