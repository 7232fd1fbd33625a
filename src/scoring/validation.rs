use std::collections::{HashMap, HashSet};

use crate::inventory::{Scale, ScaleKind, ITEM_COUNT};

/// Validate a scoring key at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_key(scales: &[Scale], reversed_items: &[u8]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let in_range = |item: u8| (1..=ITEM_COUNT).contains(&usize::from(item));

    for (i, &item) in reversed_items.iter().enumerate() {
        if !in_range(item) {
            errors.push(format!("reversed[{}]: item q{} out of range", i, item));
        }
    }

    // Item ids, per-scale duplicates
    for scale in scales {
        if scale.items.is_empty() {
            errors.push(format!("{}: has no items", scale.name));
        }
        let mut seen = HashSet::new();
        for &item in scale.items {
            if !in_range(item) {
                errors.push(format!("{}: item q{} out of range", scale.name, item));
            }
            if !seen.insert(item) {
                errors.push(format!("{}: item q{} listed twice", scale.name, item));
            }
        }
    }

    // Domains must not share items
    let mut owner: HashMap<u8, &str> = HashMap::new();
    for scale in scales.iter().filter(|s| s.kind == ScaleKind::Domain) {
        for &item in scale.items {
            if let Some(other) = owner.insert(item, scale.name) {
                if other != scale.name {
                    errors.push(format!(
                        "{}: item q{} already belongs to {}",
                        scale.name, item, other
                    ));
                }
            }
        }
    }

    // Facets must sit inside their parent domain
    for scale in scales {
        let ScaleKind::Facet(parent) = scale.kind else {
            continue;
        };
        match scales
            .iter()
            .find(|s| s.kind == ScaleKind::Domain && s.name == parent)
        {
            Some(domain) => {
                for &item in scale.items {
                    if !domain.items.contains(&item) {
                        errors.push(format!(
                            "{}: item q{} is not part of {}",
                            scale.name, item, parent
                        ));
                    }
                }
            }
            None => errors.push(format!("{}: unknown parent domain '{}'", scale.name, parent)),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
