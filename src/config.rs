use crate::error::{FeeError, Result};
use crate::ruleset::Ruleset;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// Loads a fee ruleset from a YAML file and validates it.
pub fn load_ruleset<P: AsRef<Path>>(path: P) -> Result<Ruleset> {
    let file = File::open(path)?;
    let ruleset: Ruleset = serde_yaml::from_reader(file)?;
    validate(&ruleset)?;
    Ok(ruleset)
}

/// Parses a ruleset from a YAML string (for testing and embedding).
pub fn ruleset_from_str(yaml: &str) -> Result<Ruleset> {
    let ruleset: Ruleset = serde_yaml::from_str(yaml)?;
    validate(&ruleset)?;
    Ok(ruleset)
}

/// Fee keys must be unique within a ruleset. Inverted amount bounds are
/// an authoring defect but keep their never-matches semantics, so they
/// are only reported, not rejected.
fn validate(ruleset: &Ruleset) -> Result<()> {
    let mut keys = HashSet::new();
    for fee in &ruleset.fees {
        if !keys.insert(fee.key.as_str()) {
            return Err(FeeError::ValidationError(format!(
                "duplicate fee key: {}",
                fee.key
            )));
        }

        for rule in &fee.rules {
            if let (Some(min), Some(max)) = (rule.min_tx_amount, rule.max_tx_amount)
                && min > max
            {
                tracing::warn!(
                    key = %fee.key,
                    %min,
                    %max,
                    "criteria amount bounds are inverted; this entry can never match"
                );
            }
        }
    }
    Ok(())
}
