//! Parsing of raw genotype exports into SNP records.
//!
//! Supports VCF, 23andMe raw data and a loose "rsid chromosome position
//! genotype" tab/whitespace format. Bad lines never abort a parse; they are
//! collected in [`ParseResult::errors`].

mod formats;
pub mod validation;

pub use validation::{select_scoreable, validate_snp, validate_snps};

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Vcf,
    #[value(name = "23andme")]
    TwentyThreeAndMe,
    #[value(name = "tab")]
    CustomTab,
    Auto,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Vcf => write!(f, "vcf"),
            InputFormat::TwentyThreeAndMe => write!(f, "23andme"),
            InputFormat::CustomTab => write!(f, "tab"),
            InputFormat::Auto => write!(f, "auto"),
        }
    }
}

/// A parsed SNP, serialized in the shape the analysis endpoint accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snp {
    #[serde(rename = "rsId")]
    pub rs_id: String,
    pub chromosome: String,
    pub position: i64,
    pub genotype: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// The format actually used (never `Auto`)
    pub format: InputFormat,
    pub snps: Vec<Snp>,
    pub errors: Vec<String>,
}

/// Parse raw genotype text. `InputFormat::Auto` sniffs the header lines.
pub fn parse(input: &str, format: InputFormat) -> ParseResult {
    let lines: Vec<&str> = input
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let format = match format {
        InputFormat::Auto => detect_format(&lines),
        explicit => explicit,
    };

    match format {
        InputFormat::Vcf => formats::parse_vcf(&lines),
        InputFormat::TwentyThreeAndMe => formats::parse_23andme(&lines),
        InputFormat::CustomTab | InputFormat::Auto => formats::parse_custom_tab(&lines),
    }
}

fn detect_format(lines: &[&str]) -> InputFormat {
    let Some(first) = lines.first() else {
        return InputFormat::CustomTab;
    };

    if first.starts_with("##fileformat=VCF") {
        return InputFormat::Vcf;
    }

    // 23andMe exports open with a block of comments ending in "# rsid ..."
    let header_is_23andme = is_23andme_header(first)
        || lines
            .iter()
            .take_while(|line| line.starts_with('#'))
            .any(|line| is_23andme_header(line));

    if header_is_23andme {
        InputFormat::TwentyThreeAndMe
    } else {
        InputFormat::CustomTab
    }
}

fn is_23andme_header(line: &str) -> bool {
    line.starts_with("# rsid") || line.contains("chromosome\tposition\tgenotype")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_custom_tab() {
        let input = "rs548049170 1 69869 TT\nrs9283150 1 565508 AA";
        let result = parse(input, InputFormat::CustomTab);

        assert_eq!(result.format, InputFormat::CustomTab);
        assert_eq!(result.snps.len(), 2);
        assert_eq!(
            result.snps[0],
            Snp {
                rs_id: "rs548049170".to_string(),
                chromosome: "1".to_string(),
                position: 69869,
                genotype: "TT".to_string(),
            }
        );
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_auto_detects_vcf() {
        let input = "##fileformat=VCFv4.2\n\
            #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tsample1\n\
            1\t69869\trs548049170\tT\tC\t.\tPASS\t.\tGT\t1/1";
        let result = parse(input, InputFormat::Auto);

        assert_eq!(result.format, InputFormat::Vcf);
        assert_eq!(result.snps.len(), 1);
        assert_eq!(result.snps[0].genotype, "CC");
    }

    #[test]
    fn test_auto_detects_23andme() {
        let input = "# This data file generated by 23andMe\n\
            # rsid\tchromosome\tposition\tgenotype\n\
            rs4477212\t1\t82154\tAA\n\
            rs3094315\t1\t752566\tAG";
        let result = parse(input, InputFormat::Auto);

        assert_eq!(result.format, InputFormat::TwentyThreeAndMe);
        assert_eq!(result.snps.len(), 2);
        assert_eq!(result.snps[1].genotype, "AG");
    }

    #[test]
    fn test_auto_defaults_to_custom_tab() {
        let result = parse("rs1\t2\t300\tGG", InputFormat::Auto);
        assert_eq!(result.format, InputFormat::CustomTab);
        assert_eq!(result.snps.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let result = parse("   \n\n", InputFormat::Auto);
        assert_eq!(result.format, InputFormat::CustomTab);
        assert!(result.snps.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_parse_errors_collected() {
        let input = "invalid line\nrs123 1 100";
        let result = parse(input, InputFormat::CustomTab);
        assert_eq!(result.errors.len(), 2);
        assert!(result.snps.is_empty());
    }

    #[test]
    fn test_snp_serializes_for_endpoint() {
        let snp = Snp {
            rs_id: "rs1".to_string(),
            chromosome: "7".to_string(),
            position: 42,
            genotype: "AT".to_string(),
        };
        let json = serde_json::to_value(&snp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rsId": "rs1", "chromosome": "7", "position": 42, "genotype": "AT"})
        );
    }
}
