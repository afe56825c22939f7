//! Classification of failed DNS lookups into the problem details reported
//! to ACME clients by the validation pipeline.

pub mod bdns;
pub mod conf;
pub mod probs;
pub mod shared;
