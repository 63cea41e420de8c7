//! # medcast Features
//!
//! Feature derivation and categorical encoding for the medcast pipeline:
//!
//! - [`builder`] - derived columns over raw records (bmi/age buckets,
//!   binary risk indicators), fail-soft on missing source columns
//! - [`encoder`] - one-hot encoding with a fitted, serializable vocabulary
//!   (sorted levels, reference level dropped)

pub mod builder;
pub mod encoder;

pub use builder::{
    add_bmi_category, add_demographic_features, add_risk_indicators, age_group, bmi_category,
    build_feature_pipeline,
};
pub use encoder::{Dataset, Encoder, Vocabulary, CATEGORICAL_COLUMNS, TARGET_COLUMN, TEXT_COLUMN};
