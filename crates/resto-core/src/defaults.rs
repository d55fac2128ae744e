//! # Built-in Default Data
//!
//! The demo collections a fresh (or reset) store starts from.
//!
//! ```text
//! Spice Garden (r1, pro)          Urban Burger Co. (r2, trial)
//! ├── m1 Butter Chicken  ₹350     └── m4 Classic Cheeseburger ₹250
//! ├── m2 Paneer Tikka    ₹280
//! ├── m3 Garlic Naan     ₹60      tables r2-t1..t8, t1 occupied
//! ├── o1 pending   ₹470 (Table 5)
//! ├── o2 preparing ₹280 (Table 2)
//! └── tables r1-t1..t10, t2/t5 occupied, t8 reserved
//! ```

use chrono::NaiveDate;

use crate::money::Money;
use crate::types::{
    Dietary, MenuItem, Order, OrderItem, OrderStatus, Restaurant, RestaurantFeatures,
    SubscriptionPlan, Table, TableStatus,
};

/// Logo used when the registration form leaves it blank.
pub const DEFAULT_LOGO: &str =
    "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=100&h=100&fit=crop";

/// Cover image used when the registration form leaves it blank.
pub const DEFAULT_COVER_IMAGE: &str =
    "https://images.unsplash.com/photo-1552566626-52f8b828add9?w=1200&h=400&fit=crop";

/// Address shown until the restaurant fills it in.
pub const DEFAULT_ADDRESS: &str = "Address pending";

/// Table count used when the registration form leaves it blank.
pub const DEFAULT_TABLE_COUNT: u32 = 5;

/// Seats per table for generated floor plans.
pub const DEFAULT_TABLE_CAPACITY: u32 = 4;

const MINUTE_MS: i64 = 60 * 1000;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: "r1".to_string(),
            name: "Spice Garden".to_string(),
            slug: "spice-garden".to_string(),
            logo: DEFAULT_LOGO.to_string(),
            cover_image: DEFAULT_COVER_IMAGE.to_string(),
            tables: 10,
            address: "123 Curry Lane, Mumbai".to_string(),
            phone: "+91 98765 43210".to_string(),
            is_active: true,
            subscription_plan: SubscriptionPlan::Pro,
            features: RestaurantFeatures {
                online_payment: true,
                table_booking: true,
                email_notifications: true,
            },
            joined_date: date(2023, 11, 15),
        },
        Restaurant {
            id: "r2".to_string(),
            name: "Urban Burger Co.".to_string(),
            slug: "urban-burger".to_string(),
            logo: "https://images.unsplash.com/photo-1561758033-d89a9ad46330?w=100&h=100&fit=crop"
                .to_string(),
            cover_image:
                "https://images.unsplash.com/photo-1550547660-d9450f859349?w=1200&h=400&fit=crop"
                    .to_string(),
            tables: 8,
            address: "45 Food Street, Bangalore".to_string(),
            phone: "+91 91234 56789".to_string(),
            is_active: true,
            subscription_plan: SubscriptionPlan::Trial,
            features: RestaurantFeatures::default(),
            joined_date: date(2024, 1, 10),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn dish(
    id: &str,
    restaurant_id: &str,
    name: &str,
    description: &str,
    price: i64,
    category: &str,
    image: &str,
    dietary: Dietary,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_major(price),
        category: category.to_string(),
        image: image.to_string(),
        dietary,
        is_available: true,
    }
}

pub fn menu_items() -> Vec<MenuItem> {
    vec![
        dish(
            "m1",
            "r1",
            "Butter Chicken",
            "Rich tomato gravy with tender chicken pieces",
            350,
            "Main Course",
            "https://images.unsplash.com/photo-1603894584373-5ac82b2ae398?w=500&h=500&fit=crop",
            Dietary::NonVeg,
        ),
        dish(
            "m2",
            "r1",
            "Paneer Tikka",
            "Grilled cottage cheese with spices",
            280,
            "Starters",
            "https://images.unsplash.com/photo-1599305445671-ac291c95aaa9?w=500&h=500&fit=crop",
            Dietary::Veg,
        ),
        dish(
            "m3",
            "r1",
            "Garlic Naan",
            "Indian bread topped with garlic and butter",
            60,
            "Breads",
            "https://images.unsplash.com/photo-1633945274405-b6c8069047b0?w=500&h=500&fit=crop",
            Dietary::Veg,
        ),
        dish(
            "m4",
            "r2",
            "Classic Cheeseburger",
            "Juicy beef patty with cheddar cheese",
            250,
            "Burgers",
            "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=500&h=500&fit=crop",
            Dietary::NonVeg,
        ),
    ]
}

fn line(menu_item_id: &str, name: &str, price: i64, quantity: i64) -> OrderItem {
    OrderItem {
        menu_item_id: menu_item_id.to_string(),
        name: name.to_string(),
        price: Money::from_major(price),
        quantity,
    }
}

/// Demo orders, timestamped relative to `now_ms`.
pub fn orders(now_ms: i64) -> Vec<Order> {
    vec![
        Order {
            id: "o1".to_string(),
            restaurant_id: "r1".to_string(),
            table_id: "Table 5".to_string(),
            customer_name: "Rahul".to_string(),
            items: vec![
                line("m1", "Butter Chicken", 350, 1),
                line("m3", "Garlic Naan", 60, 2),
            ],
            status: OrderStatus::Pending,
            total_amount: Money::from_major(470),
            timestamp: now_ms - 5 * MINUTE_MS,
            note: None,
        },
        Order {
            id: "o2".to_string(),
            restaurant_id: "r1".to_string(),
            table_id: "Table 2".to_string(),
            customer_name: "Priya".to_string(),
            items: vec![line("m2", "Paneer Tikka", 280, 1)],
            status: OrderStatus::Preparing,
            total_amount: Money::from_major(280),
            timestamp: now_ms - 15 * MINUTE_MS,
            note: None,
        },
    ]
}

pub fn tables() -> Vec<Table> {
    let spice_garden = (1..=10).map(|n| Table {
        id: table_id("r1", n),
        number: n,
        capacity: if n % 2 == 0 { 4 } else { 2 },
        status: match n {
            2 | 5 => TableStatus::Occupied,
            8 => TableStatus::Reserved,
            _ => TableStatus::Free,
        },
        restaurant_id: "r1".to_string(),
    });

    let urban_burger = (1..=8).map(|n| Table {
        id: table_id("r2", n),
        number: n,
        capacity: DEFAULT_TABLE_CAPACITY,
        status: if n == 1 {
            TableStatus::Occupied
        } else {
            TableStatus::Free
        },
        restaurant_id: "r2".to_string(),
    });

    spice_garden.chain(urban_burger).collect()
}

/// Free tables `1..=count` for a newly registered restaurant.
pub fn seed_tables(restaurant_id: &str, count: u32) -> Vec<Table> {
    (1..=count)
        .map(|n| Table {
            id: table_id(restaurant_id, n),
            number: n,
            capacity: DEFAULT_TABLE_CAPACITY,
            status: TableStatus::Free,
            restaurant_id: restaurant_id.to_string(),
        })
        .collect()
}

/// `{restaurant_id}-t{number}`.
pub fn table_id(restaurant_id: &str, number: u32) -> String {
    format!("{}-t{}", restaurant_id, number)
}
