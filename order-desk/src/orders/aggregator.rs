//! Order aggregation - groups line items into order headers
//!
//! Headers are a pure projection of the line list: recomputed from scratch
//! whenever the lines change, never mutated incrementally.

use crate::pricing::TaxCalculator;
use shared::order::{LineItem, OrderHeader, OrderKey};
use std::collections::HashMap;

/// Group lines into headers using the default tax calculator (10%, floor on total)
pub fn aggregate(lines: &[LineItem]) -> Vec<OrderHeader> {
    aggregate_with(lines, &TaxCalculator::default())
}

/// Group lines into headers by order key
///
/// - Headers appear in first-seen order of their keys
/// - Lines keep their original relative order inside a header
/// - Totals are recomputed over the whole group after every line is added
pub fn aggregate_with(lines: &[LineItem], calculator: &TaxCalculator) -> Vec<OrderHeader> {
    let mut headers: Vec<OrderHeader> = Vec::new();
    let mut index: HashMap<OrderKey, usize> = HashMap::new();

    for line in lines {
        let key = line.order_key();
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                headers.push(OrderHeader::open(line));
                index.insert(key, headers.len() - 1);
                headers.len() - 1
            }
        };

        let header = &mut headers[slot];
        header.lines.push(line.clone());
        header.totals = calculator.totals(&header.lines);
    }

    tracing::debug!(
        lines = lines.len(),
        headers = headers.len(),
        "Aggregated order lines"
    );

    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::TaxPolicy;
    use chrono::NaiveDate;
    use shared::order::{DirectDeliveryClass, LineItemInput, OrderMethod};

    fn line(staff: &str, form_no: &str, qty: &str, price: &str) -> LineItem {
        LineItem::from_input(LineItemInput {
            supplier_code: "0001".to_string(),
            supplier_name: "アスワン".to_string(),
            order_method: OrderMethod::Fax,
            staff_code: staff.to_string(),
            order_form_no: form_no.to_string(),
            product_name: format!("商品{}", price),
            order_qty: qty.to_string(),
            unit_price: price.to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 12, 17).unwrap(),
            direct_delivery: DirectDeliveryClass::Direct,
            ..Default::default()
        })
    }

    #[test]
    fn test_two_lines_one_order() {
        let lines = vec![
            line("001", "000001", "2", "800000"),
            line("001", "000001", "1", "300000"),
        ];

        let headers = aggregate(&lines);

        assert_eq!(headers.len(), 1);
        let header = &headers[0];
        assert_eq!(header.order_key.as_str(), "001-000001");
        assert_eq!(header.amount_excluding_tax(), 1_900_000);
        assert_eq!(header.tax_amount(), 190_000);
        assert_eq!(header.amount_including_tax(), 2_090_000);
        assert_eq!(header.lines.len(), 2);
        assert_eq!(header.supplier_name, "アスワン");
        assert_eq!(header.order_classification, OrderMethod::Fax);
    }

    #[test]
    fn test_first_seen_key_order_and_line_order() {
        let lines = vec![
            line("002", "2", "1", "100"),
            line("001", "1", "1", "200"),
            line("002", "2", "1", "300"),
            line("003", "3", "1", "400"),
            line("001", "1", "1", "500"),
        ];

        let headers = aggregate(&lines);
        let keys: Vec<&str> = headers.iter().map(|h| h.order_key.as_str()).collect();
        assert_eq!(keys, vec!["002-000002", "001-000001", "003-000003"]);

        let prices: Vec<i64> = headers[0].lines.iter().map(|l| l.unit_price).collect();
        assert_eq!(prices, vec![100, 300]);
        let prices: Vec<i64> = headers[1].lines.iter().map(|l| l.unit_price).collect();
        assert_eq!(prices, vec![200, 500]);
    }

    #[test]
    fn test_unpadded_codes_share_a_key() {
        let lines = vec![line("1", "1", "1", "100"), line("001", "000001", "1", "100")];
        let headers = aggregate(&lines);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].lines.len(), 2);
    }

    #[test]
    fn test_total_is_conserved() {
        let lines = vec![
            line("001", "1", "3", "1,234"),
            line("002", "2", "7", "99"),
            line("001", "1", "1", "50,000"),
            line("004", "4", "x", "1000"),
        ];
        let expected: i64 = lines.iter().map(|l| l.amount()).sum();

        let headers = aggregate(&lines);
        let actual: i64 = headers.iter().map(|h| h.amount_excluding_tax()).sum();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_stable_across_calls() {
        let lines = vec![
            line("005", "5", "1", "10"),
            line("004", "4", "1", "10"),
            line("005", "5", "1", "10"),
        ];
        assert_eq!(aggregate(&lines), aggregate(&lines));
    }

    #[test]
    fn test_malformed_numbers_count_as_zero() {
        let lines = vec![line("001", "1", "abc", "100"), line("001", "1", "2", "??")];
        let headers = aggregate(&lines);
        assert_eq!(headers[0].amount_excluding_tax(), 0);
        assert_eq!(headers[0].tax_amount(), 0);
    }

    #[test]
    fn test_tax_floored_on_total_not_per_line() {
        let lines = vec![line("001", "1", "1", "15"), line("001", "1", "1", "15")];

        let aggregate_floor = aggregate(&lines);
        assert_eq!(aggregate_floor[0].tax_amount(), 3);

        let per_line = aggregate_with(&lines, &TaxCalculator::new(10, TaxPolicy::PerLineFloor));
        assert_eq!(per_line[0].tax_amount(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }
}
