//! Check command implementation.

use crate::report::{self, CheckData, CheckResult};
use anyhow::{bail, Result};
use slugify_core::{is_slug, Slugify};
use std::path::Path;

/// Report which values the configured converter would leave unchanged; fails if any is not
pub fn check_slugs(config_path: Option<&Path>, values: &[String], json: bool) -> Result<()> {
    let config = super::load_config(config_path)?;
    let converter = Slugify::new(config);

    let results: Vec<CheckResult> = values
        .iter()
        .map(|value| {
            let valid = is_canonical(&converter, value);
            CheckResult {
                value: value.clone(),
                valid,
                suggestion: (!valid).then(|| converter.slugify(value.as_str())),
            }
        })
        .collect();
    let invalid = results.iter().filter(|r| !r.valid).count();

    if json {
        let payload = report::report(
            "slugify.check",
            CheckData {
                total: results.len(),
                invalid,
                results,
            },
        );
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for result in &results {
            match &result.suggestion {
                None => println!("✓ {}", result.value),
                Some(suggestion) if suggestion.is_empty() => {
                    println!("✗ {} (no slug characters)", result.value)
                }
                Some(suggestion) => println!("✗ {} (try: {})", result.value, suggestion),
            }
        }
    }

    if invalid > 0 {
        bail!("{} of {} value(s) are not valid slugs", invalid, values.len());
    }
    Ok(())
}

/// A value is valid when it has slug shape and is a fixed point of `converter`,
/// so separator, case and stopword settings are honoured.
fn is_canonical(converter: &Slugify, value: &str) -> bool {
    is_slug(value) && converter.slugify(value) == value
}
