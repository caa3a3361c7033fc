//! Form definitions for the order screens and conversions out of them

use super::{FieldKind, FieldSpec, FormSpec, FormState};
use crate::orders::{DateRange, LineChanges, SearchCriteria};
use crate::utils::time::{format_order_date, parse_order_date, today};
use crate::utils::validation::{MAX_CODE_LEN, MAX_MEMO_LEN, MAX_NAME_LEN, MAX_ORDER_QTY};
use shared::error::{AppError, AppResult};
use shared::order::key::{ORDER_FORM_NO_WIDTH, STAFF_CODE_WIDTH};
use shared::order::{DirectDeliveryClass, DirectDeliveryFilter, OrderMethod};

fn text(name: &'static str, label: &'static str, max_len: usize) -> FieldSpec {
    FieldSpec::new(name, label, FieldKind::Text { max_len })
}

fn code(name: &'static str, label: &'static str, max_len: usize) -> FieldSpec {
    FieldSpec::new(name, label, FieldKind::Code { max_len })
}

/// Order date field prefilled with today
fn order_date() -> FieldSpec {
    FieldSpec::new("order_date", "発注日", FieldKind::Date)
        .required()
        .with_default(format_order_date(today()))
}

fn choice(name: &'static str, label: &'static str, options: &[&str]) -> FieldSpec {
    FieldSpec::new(
        name,
        label,
        FieldKind::Choice(options.iter().map(|o| o.to_string()).collect()),
    )
}

fn method_codes() -> Vec<&'static str> {
    OrderMethod::ALL.iter().map(|m| m.code()).collect()
}

/// 発注検索
pub fn order_search_form() -> FormSpec {
    FormSpec {
        name: "order_search",
        fields: vec![
            text("supplier_code", "仕入先コード", MAX_NAME_LEN),
            text("supplier_name", "仕入先名", MAX_NAME_LEN),
            text("order_number", "発注番号", STAFF_CODE_WIDTH + 1 + ORDER_FORM_NO_WIDTH),
            code("order_form_no", "発注書No", ORDER_FORM_NO_WIDTH),
            text("maker_code", "メーカーコード", MAX_CODE_LEN),
            code("staff_code", "担当者コード", STAFF_CODE_WIDTH),
            choice("order_method", "発注区分", &method_codes()),
            FieldSpec::new("order_date_start", "発注日(開始)", FieldKind::Date),
            FieldSpec::new("order_date_end", "発注日(終了)", FieldKind::Date),
            choice("direct_delivery", "直送区分", &["通常", "直送", "全て"]).with_default("全て"),
            choice("show_deleted_orders", "削除済み発注を表示", &["0", "1"]).with_default("0"),
        ],
    }
}

/// 発注書作成
pub fn order_creation_form() -> FormSpec {
    FormSpec {
        name: "order_creation",
        fields: vec![
            order_date(),
            text("supplier_codes", "仕入先", MAX_MEMO_LEN).required(),
            choice("inventory_type", "在庫区分", &["secured", "excluded"]).with_default("secured"),
        ],
    }
}

/// 明細修正
pub fn detail_edit_form() -> FormSpec {
    FormSpec {
        name: "detail_edit",
        fields: vec![
            text("memo", "メーカー連絡メモ", MAX_MEMO_LEN),
            text("end_user_name", "得意先名", MAX_NAME_LEN),
            text("maker_code", "メーカーコード", MAX_CODE_LEN),
            text("product_name", "商品名", MAX_NAME_LEN),
            text("specification", "規格(型番)", MAX_NAME_LEN),
            FieldSpec::new(
                "order_qty",
                "注文数",
                FieldKind::Integer {
                    min: 0,
                    max: MAX_ORDER_QTY,
                },
            ),
            FieldSpec::new("unit_price", "原単価", FieldKind::Amount),
            FieldSpec::new("order_date", "発注日", FieldKind::Date),
            choice("direct_delivery", "直送区分", &["通常", "直送"]),
        ],
    }
}

/// 在庫確保
pub fn inventory_securing_form() -> FormSpec {
    FormSpec {
        name: "inventory_securing",
        fields: vec![
            text("order_no", "発注No", 7),
            order_date(),
            FieldSpec::new("delivery_date", "納品日", FieldKind::Date),
            text("staff_name", "担当者", MAX_NAME_LEN).with_default("ログインユーザー"),
            text("assistant_name", "アシスタント", MAX_NAME_LEN).with_default("ログインアシスタント"),
            text("supplier_name", "仕入先名", MAX_NAME_LEN).required(),
            FieldSpec::new(
                "tax_rate",
                "税率",
                FieldKind::Integer { min: 0, max: 100 },
            )
            .with_default("10"),
            text("internal_memo", "社内メモ", MAX_MEMO_LEN),
            choice("items_per_page", "表示件数", &["50", "100"]).with_default("50"),
        ],
    }
}

/// Validate a search form and turn it into criteria
pub fn search_criteria(form: &FormState<'_>) -> AppResult<SearchCriteria> {
    form.validate()?;

    let present = |name: &str| form.get_present(name).map(str::to_string);
    let order_method = form.get_present("order_method").and_then(OrderMethod::from_code);
    let direct_delivery = form
        .get_present("direct_delivery")
        .and_then(DirectDeliveryFilter::from_label);

    let start = form.get_present("order_date_start");
    let end = form.get_present("order_date_end");
    let date_range = (start.is_some() || end.is_some()).then(|| DateRange::parse(start, end));

    Ok(SearchCriteria {
        supplier_code: present("supplier_code"),
        supplier_name: present("supplier_name"),
        order_number: present("order_number"),
        order_form_no: present("order_form_no"),
        maker_code: present("maker_code"),
        staff_code: present("staff_code"),
        order_method,
        date_range,
        direct_delivery,
        show_deleted_orders: form.get("show_deleted_orders") == Some("1"),
    })
}

/// Validate a detail edit form and turn it into a line update
///
/// Blank fields leave the line's current value untouched.
pub fn line_changes(form: &FormState<'_>) -> AppResult<LineChanges> {
    form.validate()?;

    let present = |name: &str| form.get_present(name).map(str::to_string);
    let order_date = form
        .get_present("order_date")
        .map(parse_order_date)
        .transpose()?;
    let direct_delivery = match form.get_present("direct_delivery") {
        None => None,
        Some("通常") => Some(DirectDeliveryClass::Normal),
        Some("直送") => Some(DirectDeliveryClass::Direct),
        Some(other) => {
            return Err(AppError::validation(format!("Unknown direct delivery class: {}", other)));
        }
    };

    Ok(LineChanges {
        memo: present("memo"),
        end_user_name: present("end_user_name"),
        maker_code: present("maker_code"),
        product_name: present("product_name"),
        specification: present("specification"),
        order_qty: present("order_qty"),
        unit_price: present("unit_price"),
        order_date,
        direct_delivery,
    })
}
