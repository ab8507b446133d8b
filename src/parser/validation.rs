use std::collections::HashSet;

use super::Snp;
use crate::analysis::parse_int_str;

const VALID_CHROMOSOMES: [&str; 25] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "X", "Y", "MT",
];

/// One or two bases from A, C, G, T
pub fn is_valid_genotype(genotype: &str) -> bool {
    (1..=2).contains(&genotype.len())
        && genotype
            .chars()
            .all(|base| matches!(base, 'A' | 'C' | 'G' | 'T'))
}

/// Problems with a single SNP, in field order.
pub fn validate_snp(snp: &Snp) -> Vec<String> {
    let mut errors = Vec::new();

    if snp.rs_id.is_empty() {
        errors.push("Missing rsId".to_string());
    }

    let chromosome = snp.chromosome.to_uppercase();
    if !VALID_CHROMOSOMES.contains(&chromosome.as_str()) {
        errors.push(format!(
            "Invalid chromosome: {} for {}",
            snp.chromosome, snp.rs_id
        ));
    }

    if snp.position < 1 {
        errors.push(format!("Invalid position: {} for {}", snp.position, snp.rs_id));
    }

    if !is_valid_genotype(&snp.genotype) {
        errors.push(format!("Invalid genotype: {} for {}", snp.genotype, snp.rs_id));
    }

    errors
}

/// Validate a batch of SNPs.
/// Returns all validation errors at once (not just the first), including
/// duplicates of the same (rsId, chromosome, position).
pub fn validate_snps(snps: &[Snp]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for snp in snps {
        if !seen.insert((&snp.rs_id, &snp.chromosome, snp.position)) {
            errors.push(format!("Duplicate SNP: {}", snp.rs_id));
        }
        errors.extend(validate_snp(snp));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Split SNPs into those the analysis endpoint can score and warnings for
/// the rest. A record is dropped when it fails [`validate_snp`] or when its
/// chromosome is not an integer (X, Y and MT are valid but unscoreable).
pub fn select_scoreable(snps: Vec<Snp>) -> (Vec<Snp>, Vec<String>) {
    let mut scoreable = Vec::with_capacity(snps.len());
    let mut skipped = Vec::new();

    for snp in snps {
        let errors = validate_snp(&snp);
        if !errors.is_empty() {
            skipped.extend(errors);
        } else if parse_int_str(&snp.chromosome).is_none() {
            skipped.push(format!(
                "Skipping {}: chromosome {} cannot be scored",
                snp.rs_id, snp.chromosome
            ));
        } else {
            scoreable.push(snp);
        }
    }

    (scoreable, skipped)
}
