//! Bundled sample data
//!
//! Four suppliers, four products, four customers and a set of lines covering
//! every order method. Orders 001 and 003 carry more than one line.

use super::OrderDataProvider;
use chrono::NaiveDate;
use shared::models::{Customer, Product, Supplier};
use shared::order::{DirectDeliveryClass, LineItem, LineItemInput, OrderMethod};

/// Methods in the order the sample lines cycle through them, four lines each
const SAMPLE_METHODS: [OrderMethod; 4] = [
    OrderMethod::Fax,
    OrderMethod::JdEdi,
    OrderMethod::WgEdi,
    OrderMethod::Email,
];

/// (supplier code, name as printed on the line)
const SAMPLE_COMPANIES: [(&str, &str); 4] = [
    ("0001", "アスワン"),
    ("0001", "アスワン"),
    ("0002", "和光"),
    ("0003", "キシダ化学"),
];

const SAMPLE_MEMOS: [&str; 4] = ["ロット指定", "特注品", "緊急発注", "定期購入"];

#[derive(Debug, Clone)]
pub struct MockDataProvider {
    order_date: NaiveDate,
}

impl Default for MockDataProvider {
    fn default() -> Self {
        Self {
            order_date: NaiveDate::from_ymd_opt(2024, 12, 17).unwrap_or_default(),
        }
    }
}

impl MockDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp every sample line with `order_date` instead of 2024/12/17
    pub fn with_order_date(order_date: NaiveDate) -> Self {
        Self { order_date }
    }

    fn sample_line(&self, seq: usize, product: &Product, customer: &Customer) -> LineItemInput {
        let (supplier_code, supplier_name) = SAMPLE_COMPANIES[seq % 4];
        let memo = match seq % 4 {
            0 => format!("{}：{}", SAMPLE_MEMOS[0], 111 + seq),
            n => SAMPLE_MEMOS[n].to_string(),
        };
        let order_qty = if product.unit_price >= 100_000 { "2" } else { "10" };

        let mut input = LineItemInput {
            supplier_code: supplier_code.to_string(),
            supplier_name: supplier_name.to_string(),
            order_method: SAMPLE_METHODS[seq / 4 % 4],
            memo,
            staff_code: format!("{:03}", seq + 1),
            order_form_no: format!("{:06}", seq + 1),
            order_qty: order_qty.to_string(),
            order_date: self.order_date,
            direct_delivery: DirectDeliveryClass::Direct,
            ..Default::default()
        };
        input.apply_product(product);
        input.apply_customer(customer);
        input
    }
}

impl OrderDataProvider for MockDataProvider {
    fn line_items(&self) -> Vec<LineItem> {
        let products = self.products();
        let customers = self.customers();

        let mut inputs: Vec<LineItemInput> = (0..16)
            .map(|seq| self.sample_line(seq, &products[seq % 4], &customers[seq % 4]))
            .collect();

        // Order 001: the same balance entered twice, then a rotor
        let mut repeat = inputs[0].clone();
        repeat.order_qty = "1".to_string();
        inputs[0].order_qty = "1".to_string();
        let mut rotor = inputs[0].clone();
        rotor.maker_code = "98-7654-32-11".to_string();
        rotor.product_name = "ローター".to_string();
        rotor.specification = "RT-50".to_string();
        rotor.unit_price = "300,000".to_string();
        inputs.insert(1, repeat);
        inputs.insert(2, rotor);

        // Order 003: a pH meter entered last, after every other order
        let mut extra = inputs[4].clone();
        extra.order_qty = "3".to_string();
        extra.memo = "追加".to_string();
        extra.apply_product(&products[1]);
        inputs.push(extra);

        inputs.into_iter().map(LineItem::from_input).collect()
    }

    fn suppliers(&self) -> Vec<Supplier> {
        let supplier = |code: &str, name: &str, method: OrderMethod, phone: &str, fax: &str| Supplier {
            code: code.to_string(),
            name: name.to_string(),
            order_method: method,
            phone: phone.to_string(),
            fax: fax.to_string(),
        };
        vec![
            supplier("0001", "アスワン株式会社", OrderMethod::Fax, "03-1234-5678", "03-1234-5679"),
            supplier("0002", "和光純薬工業株式会社", OrderMethod::JdEdi, "03-2345-6789", "03-2345-6790"),
            supplier("0003", "キシダ化学株式会社", OrderMethod::Web, "03-3456-7890", "03-3456-7891"),
            supplier("0004", "関東化学株式会社", OrderMethod::Email, "03-4567-8901", "03-4567-8902"),
        ]
    }

    fn products(&self) -> Vec<Product> {
        let product = |code: &str, maker: &str, name: &str, spec: &str, capacity: &str, price: i64| Product {
            code: code.to_string(),
            maker_code: maker.to_string(),
            name: name.to_string(),
            specification: spec.to_string(),
            capacity: capacity.to_string(),
            unit_price: price,
        };
        vec![
            product("P001", "63-6334-36-30", "分析天びん 320g", "ML304T/00", "1台", 800_000),
            product("P002", "12-3456-78-90", "pHメーター", "PH-200", "1個", 50_000),
            product("P003", "98-7654-32-10", "遠心分離機", "CEN-1000", "1台", 1_200_000),
            product("P004", "45-6789-01-23", "試薬A", "GR-100", "500g/瓶", 10_000),
        ]
    }

    fn customers(&self) -> Vec<Customer> {
        let customer = |code: &str, name: &str, phone: &str, address: &str| Customer {
            code: code.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        };
        vec![
            customer("0001", "●●大学", "03-1234-5678", "東京都千代田区"),
            customer("0002", "△△研究所", "03-2345-6789", "東京都港区"),
            customer("0003", "□□病院", "03-3456-7890", "東京都新宿区"),
            customer("0004", "☆☆製薬", "03-4567-8901", "東京都渋谷区"),
        ]
    }
}
