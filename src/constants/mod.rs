pub mod ap_units;
pub mod prompts;
