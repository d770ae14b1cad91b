use super::schema::Config;
use super::parse_time_limit;
use crate::session::parse_kinds;

/// Validate the effective configuration before anything is asked.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Only addition and subtraction draw operands from the limit. Without
    // preselected operations the user may still pick one of them.
    let limit_matters = match config.operations {
        Some(ref operations) => parse_kinds(operations).iter().any(|k| k.uses_limit()),
        None => true,
    };
    if let Some(limit) = config.limit {
        if limit < 2 && limit_matters {
            errors.push(format!(
                "limit: must be at least 2 to leave room for positive operands, got {}",
                limit
            ));
        }
    }

    if let Some(ref time_limit) = config.time_limit {
        if let Err(e) = parse_time_limit(time_limit) {
            errors.push(format!("time_limit: invalid '{}' - {}", time_limit, e));
        }
    }

    if let Some(ref operations) = config.operations {
        if parse_kinds(operations).is_empty() {
            errors.push(format!(
                "operations: '{}' contains none of '+', '-', '*'",
                operations
            ));
        }
    }

    if let Some(ref tables) = config.tables {
        if tables.is_empty() {
            errors.push("tables: must list at least one digit".to_string());
        }
        for (i, table) in tables.iter().enumerate() {
            if *table > 9 {
                errors.push(format!("tables[{}]: must be a digit 0-9, got {}", i, table));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
