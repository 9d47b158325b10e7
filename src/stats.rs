use crate::db::DbError;
use crate::models::{PopularItem, RecentTransaction, StatsResponse};
use chrono::{Local, NaiveDate, NaiveDateTime};
use tokio_postgres::Client;

pub const POPULAR_ITEMS_LIMIT: i64 = 10;
pub const RECENT_TRANSACTIONS_LIMIT: i64 = 20;

const TOTAL_REVENUE_SQL: &str = "
    SELECT COALESCE(SUM(price), 0)::float8 AS total_revenue
    FROM food_transactions
    WHERE DATE(created_at) = $1";

const TOTAL_ITEMS_SQL: &str = "
    SELECT COUNT(*) AS total_items
    FROM food_transactions
    WHERE DATE(created_at) = $1";

const AVG_CONFIDENCE_SQL: &str = "
    SELECT COALESCE(ROUND(AVG(confidence)::numeric, 1), 0)::float8 AS avg_confidence
    FROM food_transactions
    WHERE DATE(created_at) = $1";

// Ties on count resolve alphabetically so repeated calls agree.
const TOP_ITEM_SQL: &str = "
    SELECT food_name, COUNT(*) AS count
    FROM food_transactions
    WHERE DATE(created_at) = $1
    GROUP BY food_name
    ORDER BY count DESC, food_name ASC
    LIMIT 1";

const POPULAR_ITEMS_SQL: &str = "
    SELECT
        food_name,
        COUNT(*) AS quantity,
        ROUND(SUM(price)::numeric, 2)::float8 AS revenue,
        ROUND(AVG(confidence)::numeric, 1)::float8 AS avg_confidence
    FROM food_transactions
    WHERE DATE(created_at) = $1
    GROUP BY food_name
    ORDER BY quantity DESC, food_name ASC
    LIMIT $2";

const RECENT_TRANSACTIONS_SQL: &str = "
    SELECT
        food_name,
        price::float8 AS price,
        calories::int8 AS calories,
        confidence::float8 AS confidence,
        created_at::timestamp AS created_at
    FROM food_transactions
    ORDER BY food_transactions.created_at DESC
    LIMIT $1";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub async fn fetch_stats(client: &Client, day: NaiveDate) -> Result<StatsResponse, DbError> {
    let total_revenue: f64 = client.query_one(TOTAL_REVENUE_SQL, &[&day]).await?.try_get(0)?;
    let total_items: i64 = client.query_one(TOTAL_ITEMS_SQL, &[&day]).await?.try_get(0)?;
    let avg_confidence: f64 = client.query_one(AVG_CONFIDENCE_SQL, &[&day]).await?.try_get(0)?;
    let top_item = match client.query_opt(TOP_ITEM_SQL, &[&day]).await? {
        Some(row) => Some(row.try_get::<_, String>("food_name")?),
        None => None,
    };

    Ok(StatsResponse::new(total_revenue, total_items, avg_confidence, top_item))
}

pub async fn fetch_popular_items(
    client: &Client,
    day: NaiveDate,
) -> Result<Vec<PopularItem>, DbError> {
    let rows = client
        .query(POPULAR_ITEMS_SQL, &[&day, &POPULAR_ITEMS_LIMIT])
        .await?;

    rows.iter()
        .map(|row| -> Result<PopularItem, DbError> {
            Ok(PopularItem {
                food_name: row.try_get("food_name")?,
                quantity: row.try_get("quantity")?,
                revenue: row.try_get("revenue")?,
                avg_confidence: row.try_get("avg_confidence")?,
            })
        })
        .collect()
}

pub async fn fetch_recent_transactions(client: &Client) -> Result<Vec<RecentTransaction>, DbError> {
    let rows = client
        .query(RECENT_TRANSACTIONS_SQL, &[&RECENT_TRANSACTIONS_LIMIT])
        .await?;

    rows.iter()
        .map(|row| -> Result<RecentTransaction, DbError> {
            let created_at: NaiveDateTime = row.try_get("created_at")?;
            Ok(RecentTransaction {
                food_name: row.try_get("food_name")?,
                price: row.try_get("price")?,
                calories: row.try_get("calories")?,
                confidence: row.try_get("confidence")?,
                created_at: iso_timestamp(created_at),
            })
        })
        .collect()
}

/// `YYYY-MM-DDTHH:MM:SS`, with a fractional part only when the value has one.
pub fn iso_timestamp(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}
