//! Built-in sample collections.
//!
//! Each function builds a fresh collection, so a screen entered twice starts
//! from the same data. Order timestamps are relative to the caller's clock.

use crate::domain::{
    InventoryRecord, LineItem, MenuCategory, MenuRecord, OrderRecord, OrderStatus, StaffRecord,
    StaffStatus, TableRecord, TableStatus,
};

/// Ten pantry items across six categories, none of them low on stock.
#[must_use]
pub fn inventory() -> Vec<InventoryRecord> {
    vec![
        InventoryRecord::new(1, "Basmati Rice", "Grains", 50, "kg", 20, 85.0),
        InventoryRecord::new(2, "Tandoori Masala", "Spices", 15, "kg", 5, 450.0),
        InventoryRecord::new(3, "Paneer", "Dairy", 25, "kg", 10, 320.0),
        InventoryRecord::new(4, "Tomatoes", "Vegetables", 30, "kg", 15, 40.0),
        InventoryRecord::new(5, "Chicken", "Meat", 40, "kg", 20, 220.0),
        InventoryRecord::new(6, "Cooking Oil", "Oil", 60, "L", 20, 150.0),
        InventoryRecord::new(7, "Garam Masala", "Spices", 8, "kg", 5, 800.0),
        InventoryRecord::new(8, "Onions", "Vegetables", 45, "kg", 20, 35.0),
        InventoryRecord::new(9, "Butter", "Dairy", 20, "kg", 8, 420.0),
        InventoryRecord::new(10, "Wheat Flour", "Grains", 70, "kg", 30, 45.0),
    ]
}

/// One dish per menu category.
#[must_use]
pub fn menu() -> Vec<MenuRecord> {
    vec![
        MenuRecord::new(
            "1",
            "Paneer Tikka",
            "Marinated cottage cheese cubes grilled to perfection with Indian spices",
            299.0,
            MenuCategory::Starters,
        )
        .vegetarian()
        .spicy(),
        MenuRecord::new(
            "2",
            "Butter Chicken",
            "Tender chicken in rich tomato-based curry with butter and cream",
            499.0,
            MenuCategory::MainCourse,
        )
        .spicy()
        .with_prep_time(25),
        MenuRecord::new(
            "3",
            "Gulab Jamun",
            "Deep-fried milk solids soaked in sugar syrup, served warm",
            149.0,
            MenuCategory::Desserts,
        )
        .vegetarian(),
        MenuRecord::new(
            "4",
            "Masala Dosa",
            "Crispy rice crepe filled with spiced potato mixture",
            199.0,
            MenuCategory::Specials,
        )
        .vegetarian()
        .spicy(),
        MenuRecord::new(
            "5",
            "Mango Lassi",
            "Refreshing yogurt-based drink with sweet mango pulp",
            99.0,
            MenuCategory::Beverages,
        )
        .vegetarian(),
    ]
}

/// Three open orders placed just now, 15 and 30 minutes before `now_millis`.
#[must_use]
pub fn orders_at(now_millis: i64) -> Vec<OrderRecord> {
    vec![
        OrderRecord::new(
            "1",
            5,
            vec![
                LineItem::new("Butter Chicken", 2, 299.99),
                LineItem::new("Naan", 4, 49.99),
            ],
            OrderStatus::New,
            now_millis,
        ),
        OrderRecord::new(
            "2",
            3,
            vec![
                LineItem::new("Paneer Tikka", 1, 249.99),
                LineItem::new("Jeera Rice", 2, 129.99),
                LineItem::new("Lassi", 2, 79.99),
            ],
            OrderStatus::Preparing,
            now_millis - 900_000,
        )
        .with_instructions("Less spicy, no onions"),
        OrderRecord::new(
            "3",
            7,
            vec![
                LineItem::new("Dal Makhani", 1, 199.99),
                LineItem::new("Biryani", 1, 349.99),
            ],
            OrderStatus::Ready,
            now_millis - 1_800_000,
        ),
    ]
}

/// [`orders_at`] the current wall-clock time.
#[must_use]
pub fn orders() -> Vec<OrderRecord> {
    orders_at(chrono::Utc::now().timestamp_millis())
}

/// Five team members: three active, one off duty, one on leave.
#[must_use]
pub fn staff() -> Vec<StaffRecord> {
    vec![
        StaffRecord::new(1, "Rajesh Kumar", "Chef", StaffStatus::Active, "Morning", "+91 98765 43210", "rajesh@email.com"),
        StaffRecord::new(2, "Priya Sharma", "Server", StaffStatus::Active, "Evening", "+91 98765 43211", "priya@email.com"),
        StaffRecord::new(3, "Amit Patel", "Bartender", StaffStatus::OffDuty, "Night", "+91 98765 43212", "amit@email.com"),
        StaffRecord::new(4, "Neha Gupta", "Host", StaffStatus::Active, "Morning", "+91 98765 43213", "neha@email.com"),
        StaffRecord::new(5, "Suresh Verma", "Kitchen Staff", StaffStatus::OnLeave, "Evening", "+91 98765 43214", "suresh@email.com"),
    ]
}

/// Eight tables seating 34 in total.
#[must_use]
pub fn tables() -> Vec<TableRecord> {
    vec![
        TableRecord::new(1, 2, TableStatus::Available),
        TableRecord::new(2, 4, TableStatus::Occupied).seated(3),
        TableRecord::new(3, 6, TableStatus::Reserved).reserved_for("Rahul Sharma", "19:30"),
        TableRecord::new(4, 2, TableStatus::Cleaning),
        TableRecord::new(5, 8, TableStatus::Available),
        TableRecord::new(6, 4, TableStatus::Occupied).seated(4),
        TableRecord::new(7, 2, TableStatus::Reserved).reserved_for("Priya Patel", "20:00"),
        TableRecord::new(8, 6, TableStatus::Available),
    ]
}
