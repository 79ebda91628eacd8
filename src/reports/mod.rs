mod charts;
mod tables;

pub use self::charts::print_all as print_charts;
pub use self::tables::{
    breakdown as print_breakdown, catalog as print_catalog, results as print_results,
};
