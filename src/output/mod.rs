pub mod export;
pub mod formatter;

pub use export::save_analysis;
pub use formatter::{
    format_pathogenicity, format_results_table, format_summary, format_variant_detail,
    should_use_colors,
};
