use order_desk::orders::paginate;
use order_desk::{MockDataProvider, OrderBook, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    let config = setup_environment();

    tracing::info!(
        tax_rate = config.tax_rate_percent,
        tax_policy = %config.tax_policy,
        "Order desk starting"
    );

    // 2. Load the sample lines
    let book = OrderBook::from_provider(&MockDataProvider::new(), config.tax_calculator());

    // 3. First page of aggregated headers
    let headers = book.headers();
    let page = paginate(&headers, 1, config.page_size.rows());
    tracing::info!(
        orders = page.total_items,
        pages = page.total_pages,
        "Orders aggregated"
    );

    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
