// wealthscope-core/src/domain/stats/mod.rs

pub mod aggregation;
pub mod charts;
pub mod industry;
pub mod net_worth;

pub use aggregation::{
    DEFAULT_SUGGESTION_LIMIT, age_range, countries, find_record, industry_categories, net_worth_range,
    records_by_industry, search_suggestions, sources, top_countries,
};
pub use charts::ChartSort;
pub use industry::{OTHER_INDUSTRY, industry_for, sources_in};
pub use net_worth::{format_millions, parse_net_worth, parse_percentage};
