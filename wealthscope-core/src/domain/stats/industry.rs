// wealthscope-core/src/domain/stats/industry.rs

pub const OTHER_INDUSTRY: &str = "Other";

// Source string (as written in the dataset) -> industry category.
const INDUSTRY_MAPPING: &[(&str, &str)] = &[
    ("Tesla, SpaceX", "Technology"),
    ("Oracle", "Technology"),
    ("Facebook", "Technology"),
    ("Amazon", "Technology"),
    ("Google", "Technology"),
    ("Microsoft", "Technology"),
    ("Semiconductors", "Technology"),
    ("Dell Technologies", "Technology"),
    ("Bloomberg LP", "Technology"),
    ("TikTok", "Technology"),
    ("Online games", "Technology"),
    ("E-commerce", "Technology"),
    ("Cryptocurrency exchange", "Technology"),
    ("Smartphones, automobiles", "Technology"),
    ("Batteries", "Technology"),
    ("LVMH", "Luxury Goods"),
    ("Zara", "Fashion & Retail"),
    ("Fashion retail", "Fashion & Retail"),
    ("Retail", "Fashion & Retail"),
    ("Walmart", "Retail"),
    ("Aldi, Trader Joe's", "Retail"),
    ("Berkshire Hathaway", "Investments"),
    ("Investments", "Investments"),
    ("Trading, investments", "Investments"),
    ("Hedge funds", "Investments"),
    ("Discount brokerage", "Investments"),
    ("Diversified", "Investments"),
    ("Koch, Inc.", "Energy & Chemicals"),
    ("Steel", "Manufacturing"),
    ("Aluminum", "Manufacturing"),
    ("Aluminum products", "Manufacturing"),
    ("Fasteners", "Manufacturing"),
    ("Nutella, chocolates", "Food & Beverages"),
    ("Candy, pet food", "Food & Beverages"),
    ("Red Bull", "Food & Beverages"),
    ("Beverages, pharmaceuticals", "Food & Beverages"),
    ("Alcoholic beverages", "Food & Beverages"),
    ("Telecom", "Telecommunications"),
    ("Telecom, Investments", "Telecommunications"),
    ("Shipping", "Transportation"),
    ("Airline", "Transportation"),
    ("Aircraft leasing", "Transportation"),
    ("L'Oréal", "Consumer Goods"),
    ("Apparel", "Consumer Goods"),
    ("Infrastructure, commodities", "Infrastructure"),
    ("Utilities", "Infrastructure"),
];

/// Exact-match lookup; anything not in the table is "Other".
pub fn industry_for(source: &str) -> &'static str {
    INDUSTRY_MAPPING
        .iter()
        .find(|(s, _)| *s == source)
        .map_or(OTHER_INDUSTRY, |(_, industry)| industry)
}

/// Every dataset source the table files under `industry`, in table order.
pub fn sources_in(industry: &str) -> Vec<&'static str> {
    INDUSTRY_MAPPING
        .iter()
        .filter(|(_, i)| *i == industry)
        .map(|(source, _)| *source)
        .collect()
}
