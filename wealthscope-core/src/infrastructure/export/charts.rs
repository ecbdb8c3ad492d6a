// wealthscope-core/src/infrastructure/export/charts.rs

use csv::{Terminator, WriterBuilder};
use serde::Serialize;

use crate::infrastructure::error::InfrastructureError;

/// Chart series as CSV, one row per point, header taken from the field names.
pub fn render_chart_csv<T: Serialize>(points: &[T]) -> Result<Vec<u8>, InfrastructureError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    for point in points {
        writer.serialize(point)?;
    }
    Ok(writer.into_inner()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stats::charts::CountryPoint;

    #[test]
    fn test_country_points_to_csv() -> anyhow::Result<()> {
        let points = vec![
            CountryPoint {
                name: "United States".into(),
                billionaires: 2,
                total_wealth: 390,
                avg_wealth: 195,
                avg_age: 54,
            },
            CountryPoint {
                name: "France".into(),
                billionaires: 1,
                total_wealth: 158,
                avg_wealth: 158,
                avg_age: 73,
            },
        ];

        let csv = String::from_utf8(render_chart_csv(&points)?)?;
        assert_eq!(
            csv,
            "name,billionaires,totalWealth,avgWealth,avgAge\r\n\
             United States,2,390,195,54\r\n\
             France,1,158,158,73\r\n"
        );
        Ok(())
    }

    #[test]
    fn test_no_points_no_bytes() -> anyhow::Result<()> {
        let points: Vec<CountryPoint> = Vec::new();
        assert!(render_chart_csv(&points)?.is_empty());
        Ok(())
    }
}
