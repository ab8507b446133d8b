use super::validation::is_valid_genotype;
use super::{InputFormat, ParseResult, Snp};
use crate::analysis::parse_int_str;

/// Genotype used when a VCF sample has no usable GT call
const NO_CALL: &str = "NN";

pub(super) fn parse_vcf(lines: &[&str]) -> ParseResult {
    let mut snps = Vec::new();
    let mut errors = Vec::new();
    let mut header_found = false;

    for line in lines {
        if line.starts_with("##") {
            continue;
        }
        if line.starts_with("#CHROM") {
            header_found = true;
            continue;
        }
        if !header_found {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() < 10 {
            errors.push(format!("Invalid VCF line: {}", line));
            continue;
        }

        let (chrom, pos, id, reference, alt) = (parts[0], parts[1], parts[2], parts[3], parts[4]);
        let (format, sample) = (parts[8], parts[9]);

        let Some(position) = parse_int_str(pos) else {
            errors.push(format!("Invalid position '{}' in line: {}", pos, line));
            continue;
        };

        let chromosome = strip_chr(chrom);
        let rs_id = if id != "." {
            id.to_string()
        } else {
            format!("chr{}:{}", chromosome, position)
        };

        snps.push(Snp {
            rs_id,
            chromosome: chromosome.to_string(),
            position,
            genotype: extract_vcf_genotype(format, sample, reference, alt),
        });
    }

    ParseResult {
        format: InputFormat::Vcf,
        snps,
        errors,
    }
}

pub(super) fn parse_23andme(lines: &[&str]) -> ParseResult {
    let mut snps = Vec::new();
    let mut errors = Vec::new();

    for line in lines {
        if line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() < 4 {
            errors.push(format!("Invalid 23andMe line: {}", line));
            continue;
        }

        let Some(position) = parse_int_str(parts[2]) else {
            errors.push(format!("Invalid position '{}' in line: {}", parts[2], line));
            continue;
        };

        snps.push(Snp {
            rs_id: parts[0].to_string(),
            chromosome: strip_chr(parts[1]).to_string(),
            position,
            genotype: parts[3].trim().to_string(),
        });
    }

    ParseResult {
        format: InputFormat::TwentyThreeAndMe,
        snps,
        errors,
    }
}

pub(super) fn parse_custom_tab(lines: &[&str]) -> ParseResult {
    let mut snps = Vec::new();
    let mut errors = Vec::new();

    for line in lines {
        if line.starts_with('#') {
            continue;
        }

        let mut parts: Vec<&str> = line.split('\t').collect();
        if parts.len() < 4 {
            parts = line.split_whitespace().collect();
        }
        if parts.len() < 4 {
            errors.push(format!("Invalid format in line: {}", line));
            continue;
        }

        let (rs_id, chromosome, position, genotype) =
            (parts[0], parts[1], parts[2], parts[3].trim());

        if !rs_id.starts_with("rs") && !rs_id.contains(':') {
            errors.push(format!("Invalid rsId format: {}", rs_id));
            continue;
        }

        if !is_valid_genotype(genotype) {
            errors.push(format!("Invalid genotype: {} for {}", genotype, rs_id));
            continue;
        }

        let Some(position) = parse_int_str(position) else {
            errors.push(format!("Invalid position '{}' for {}", position, rs_id));
            continue;
        };

        snps.push(Snp {
            rs_id: rs_id.to_string(),
            chromosome: strip_chr(chromosome).to_string(),
            position,
            genotype: genotype.to_string(),
        });
    }

    ParseResult {
        format: InputFormat::CustomTab,
        snps,
        errors,
    }
}

fn strip_chr(chromosome: &str) -> &str {
    chromosome.strip_prefix("chr").unwrap_or(chromosome)
}

/// Resolve the GT call of a VCF sample through the REF/ALT alleles.
/// "0/1" with REF=A, ALT=G yields "AG"; an index past the allele list yields "N".
fn extract_vcf_genotype(format: &str, sample: &str, reference: &str, alt: &str) -> String {
    let Some(gt_index) = format.split(':').position(|field| field == "GT") else {
        return NO_CALL.to_string();
    };

    let Some(gt) = sample.split(':').nth(gt_index).filter(|gt| !gt.is_empty()) else {
        return NO_CALL.to_string();
    };

    let alleles: Vec<&str> = std::iter::once(reference).chain(alt.split(',')).collect();
    let mut calls = gt.split(['/', '|']).map(|call| call.parse::<usize>().ok());

    let (Some(Some(first)), Some(Some(second))) = (calls.next(), calls.next()) else {
        return NO_CALL.to_string();
    };

    let allele = |index: usize| alleles.get(index).copied().unwrap_or("N");
    format!("{}{}", allele(first), allele(second))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VCF_HEADER: &str = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tsample1";

    #[test]
    fn test_vcf_skips_lines_before_header() {
        let lines = vec!["1\t100\trs1\tA\tG\t.\tPASS\t.\tGT\t0/1", VCF_HEADER];
        let result = parse_vcf(&lines);
        assert!(result.snps.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_vcf_missing_id_uses_location() {
        let lines = vec![VCF_HEADER, "chr2\t4500\t.\tA\tG\t.\tPASS\t.\tGT\t0|1"];
        let result = parse_vcf(&lines);
        assert_eq!(result.snps[0].rs_id, "chr2:4500");
        assert_eq!(result.snps[0].chromosome, "2");
        assert_eq!(result.snps[0].genotype, "AG");
    }

    #[test]
    fn test_vcf_short_line_is_error() {
        let lines = vec![VCF_HEADER, "1\t100\trs1\tA\tG"];
        let result = parse_vcf(&lines);
        assert!(result.snps.is_empty());
        assert!(result.errors[0].starts_with("Invalid VCF line"));
    }

    #[test]
    fn test_vcf_bad_position_is_error() {
        let lines = vec![VCF_HEADER, "1\tabc\trs1\tA\tG\t.\tPASS\t.\tGT\t0/1"];
        let result = parse_vcf(&lines);
        assert!(result.snps.is_empty());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_extract_genotype() {
        assert_eq!(extract_vcf_genotype("GT", "0/0", "A", "G"), "AA");
        assert_eq!(extract_vcf_genotype("GT:DP", "1|2:30", "A", "G,T"), "GT");
        assert_eq!(extract_vcf_genotype("DP:GT", "30:0/1", "C", "T"), "CT");
    }

    #[test]
    fn test_extract_genotype_no_call() {
        assert_eq!(extract_vcf_genotype("DP", "30", "A", "G"), "NN");
        assert_eq!(extract_vcf_genotype("GT", "./.", "A", "G"), "NN");
        assert_eq!(extract_vcf_genotype("GT", "1", "A", "G"), "NN");
        assert_eq!(extract_vcf_genotype("GT:DP", ":30", "A", "G"), "NN");
    }

    #[test]
    fn test_extract_genotype_out_of_range_allele() {
        assert_eq!(extract_vcf_genotype("GT", "0/3", "A", "G"), "AN");
    }

    #[test]
    fn test_23andme_parses_and_strips_chr() {
        let lines = vec!["# rsid\tchromosome\tposition\tgenotype", "rs1\tchrX\t500\tA \t"];
        let result = parse_23andme(&lines);
        assert_eq!(result.snps.len(), 1);
        assert_eq!(result.snps[0].chromosome, "X");
        assert_eq!(result.snps[0].genotype, "A");
    }

    #[test]
    fn test_23andme_short_line_is_error() {
        let result = parse_23andme(&["rs1\t1\t500"]);
        assert!(result.errors[0].starts_with("Invalid 23andMe line"));
    }

    #[test]
    fn test_custom_tab_validates_rs_id() {
        let result = parse_custom_tab(&["snp1 1 100 AA", "1:100 1 100 AA"]);
        assert_eq!(result.snps.len(), 1);
        assert_eq!(result.snps[0].rs_id, "1:100");
        assert_eq!(result.errors, vec!["Invalid rsId format: snp1".to_string()]);
    }

    #[test]
    fn test_custom_tab_validates_genotype() {
        let result = parse_custom_tab(&["rs1 1 100 AAA", "rs2 1 100 --"]);
        assert!(result.snps.is_empty());
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_custom_tab_prefers_tabs() {
        let result = parse_custom_tab(&["rs1\tchr3\t12345\tCG"]);
        assert_eq!(result.snps[0].chromosome, "3");
        assert_eq!(result.snps[0].position, 12345);
    }
}
