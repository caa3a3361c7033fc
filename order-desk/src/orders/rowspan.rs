//! Row-span planning for detail tables
//!
//! Consecutive lines with an identical business key collapse into one spanned
//! row. Only adjacent runs merge: an identical line after an interruption opens
//! a new group.
//!
//! [`compute_row_spans`] yields one [`RowSpanPlan`] per group; whether a line
//! emits its business-key cells is a per-line fact, carried by the
//! [`RowRender`] rows from [`expand_rows`].

use serde::Serialize;
use shared::order::LineItem;

/// One group of consecutive identical lines
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RowSpanPlan {
    /// Index of the first line in the group
    pub start_index: usize,
    /// Number of lines in the group (>= 1)
    pub span: usize,
}

/// Per-line rendering instruction
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RowRender {
    pub index: usize,
    /// `Some(span)` on the row that opens a group
    pub rowspan: Option<usize>,
    /// False on continuation rows: only per-row cells (line number) render
    pub render_fields: bool,
}

/// Greedy forward scan over `lines`, O(n)
pub fn compute_row_spans(lines: &[LineItem]) -> Vec<RowSpanPlan> {
    let mut plans: Vec<RowSpanPlan> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let continues = i > 0 && lines[i - 1].business_key() == line.business_key();

        match plans.last_mut() {
            Some(open) if continues => open.span += 1,
            _ => plans.push(RowSpanPlan {
                start_index: i,
                span: 1,
            }),
        }
    }

    plans
}

/// Expand group plans into one instruction per line
pub fn expand_rows(plans: &[RowSpanPlan]) -> Vec<RowRender> {
    plans
        .iter()
        .flat_map(|plan| {
            (0..plan.span).map(move |offset| RowRender {
                index: plan.start_index + offset,
                rowspan: (offset == 0).then_some(plan.span),
                render_fields: offset == 0,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::LineItemInput;

    fn line(product: &str, qty: &str) -> LineItem {
        LineItem::from_input(LineItemInput {
            staff_code: "001".to_string(),
            order_form_no: "000001".to_string(),
            end_user_name: "●●大学".to_string(),
            maker_code: "63-6334-36".to_string(),
            product_name: product.to_string(),
            order_qty: qty.to_string(),
            unit_price: "800,000".to_string(),
            ..Default::default()
        })
    }

    fn spans(plans: &[RowSpanPlan]) -> Vec<usize> {
        plans.iter().map(|p| p.span).collect()
    }

    #[test]
    fn test_three_identical_lines_one_group() {
        let lines = vec![line("A", "1"), line("A", "1"), line("A", "1")];
        let plans = compute_row_spans(&lines);
        assert_eq!(
            plans,
            vec![RowSpanPlan {
                start_index: 0,
                span: 3,
            }]
        );
    }

    #[test]
    fn test_first_differs() {
        let lines = vec![line("B", "1"), line("A", "1"), line("A", "1")];
        assert_eq!(spans(&compute_row_spans(&lines)), vec![1, 2]);
    }

    #[test]
    fn test_no_matches() {
        let lines = vec![line("A", "1"), line("A", "2"), line("A", "3")];
        let plans = compute_row_spans(&lines);
        assert_eq!(spans(&plans), vec![1, 1, 1]);
        assert!(expand_rows(&plans).iter().all(|r| r.render_fields));
    }

    #[test]
    fn test_non_adjacent_duplicates_stay_separate() {
        let lines = vec![line("A", "1"), line("B", "1"), line("A", "1")];
        let plans = compute_row_spans(&lines);
        assert_eq!(spans(&plans), vec![1, 1, 1]);
        let starts: Vec<usize> = plans.iter().map(|p| p.start_index).collect();
        assert_eq!(starts, vec![0, 1, 2]);
    }

    #[test]
    fn test_fields_outside_business_key_ignored() {
        let mut second = line("A", "1");
        second.specification = "500ml".to_string();
        second.supplier_name = "和光".to_string();
        let lines = vec![line("A", "1"), second];
        assert_eq!(spans(&compute_row_spans(&lines)), vec![2]);
    }

    #[test]
    fn test_memo_is_part_of_business_key() {
        let mut second = line("A", "1");
        second.memo = "至急".to_string();
        let lines = vec![line("A", "1"), second];
        assert_eq!(spans(&compute_row_spans(&lines)), vec![1, 1]);
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_row_spans(&[]).is_empty());
        assert!(expand_rows(&[]).is_empty());
    }

    #[test]
    fn test_expand_rows() {
        let lines = vec![line("A", "1"), line("A", "1"), line("B", "1")];
        let rows = expand_rows(&compute_row_spans(&lines));

        assert_eq!(
            rows,
            vec![
                RowRender {
                    index: 0,
                    rowspan: Some(2),
                    render_fields: true
                },
                RowRender {
                    index: 1,
                    rowspan: None,
                    render_fields: false
                },
                RowRender {
                    index: 2,
                    rowspan: Some(1),
                    render_fields: true
                },
            ]
        );
    }

    #[test]
    fn test_only_group_openers_render_fields() {
        let lines = vec![
            line("A", "1"),
            line("A", "1"),
            line("A", "1"),
            line("B", "1"),
            line("A", "1"),
        ];
        let rows = expand_rows(&compute_row_spans(&lines));
        let flags: Vec<bool> = rows.iter().map(|r| r.render_fields).collect();
        assert_eq!(flags, vec![true, false, false, true, true]);
        let openers: Vec<Option<usize>> = rows.iter().map(|r| r.rowspan).collect();
        assert_eq!(openers, vec![Some(3), None, None, Some(1), Some(1)]);
    }

    #[test]
    fn test_spans_cover_every_line() {
        let lines = vec![
            line("A", "1"),
            line("A", "1"),
            line("B", "2"),
            line("A", "1"),
            line("A", "1"),
            line("A", "1"),
        ];
        let plans = compute_row_spans(&lines);
        assert_eq!(plans.iter().map(|p| p.span).sum::<usize>(), lines.len());
        assert_eq!(expand_rows(&plans).len(), lines.len());
    }
}
