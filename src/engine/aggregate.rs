//! Summary figures derived from a record collection.
//!
//! Each record type picks its reducer through the [`Aggregate`] trait, so
//! `compute_aggregates(&staff)` yields [`StaffStats`] and
//! `compute_aggregates(&tables)` yields [`TableStats`]. Empty collections
//! produce all-zero stats; ratios guard their denominators and return 0.

use crate::domain::{
    InventoryRecord, MenuRecord, Money, OrderRecord, OrderStatus, StaffRecord, StaffStatus,
    TableRecord, TableStatus,
};
use serde::Serialize;

/// A record type with a summary reducer.
pub trait Aggregate: Sized {
    type Stats;

    fn aggregate<'a, I>(records: I) -> Self::Stats
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a;
}

/// Reduces a collection (or a filtered view of one) to its summary stats.
pub fn compute_aggregates<'a, T, I>(records: I) -> T::Stats
where
    T: Aggregate + 'a,
    I: IntoIterator<Item = &'a T>,
{
    T::aggregate(records)
}

/// `part / whole`, or 0 when `whole` is 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Whole percentage of a ratio, rounded half-up (`0.6666` is 67).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent(ratio: f64) -> u32 {
    if !ratio.is_finite() || ratio <= 0.0 {
        return 0;
    }
    (ratio * 100.0 + 1e-9).round() as u32
}

/// Sum of `price * quantity` over an order's line items.
#[must_use]
pub fn order_total(order: &OrderRecord) -> Money {
    order.total()
}

/// Sum of order totals across a (possibly filtered) set of orders.
pub fn revenue<'a, I>(orders: I) -> Money
where
    I: IntoIterator<Item = &'a OrderRecord>,
{
    orders.into_iter().map(OrderRecord::total).sum()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub total_items: usize,
    pub low_stock_count: usize,
    /// Value of stock on hand, `Σ quantity * price`.
    pub stock_value: Money,
}

impl Aggregate for InventoryRecord {
    type Stats = InventoryStats;

    fn aggregate<'a, I>(records: I) -> InventoryStats
    where
        I: IntoIterator<Item = &'a Self>,
    {
        records
            .into_iter()
            .fold(InventoryStats::default(), |mut stats, item| {
                stats.total_items += 1;
                if item.is_low_stock() {
                    stats.low_stock_count += 1;
                }
                stats.stock_value += Money::from_amount(item.price).times(item.quantity);
                stats
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    pub total_orders: usize,
    pub new: usize,
    pub preparing: usize,
    pub ready: usize,
    pub delivered: usize,
    pub cancelled: usize,
    pub revenue: Money,
}

impl OrderStats {
    #[must_use]
    pub const fn count(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::New => self.new,
            OrderStatus::Preparing => self.preparing,
            OrderStatus::Ready => self.ready,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    /// Orders still in the kitchen.
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.new + self.preparing + self.ready
    }
}

impl Aggregate for OrderRecord {
    type Stats = OrderStats;

    fn aggregate<'a, I>(records: I) -> OrderStats
    where
        I: IntoIterator<Item = &'a Self>,
    {
        records
            .into_iter()
            .fold(OrderStats::default(), |mut stats, order| {
                stats.total_orders += 1;
                match order.status {
                    OrderStatus::New => stats.new += 1,
                    OrderStatus::Preparing => stats.preparing += 1,
                    OrderStatus::Ready => stats.ready += 1,
                    OrderStatus::Delivered => stats.delivered += 1,
                    OrderStatus::Cancelled => stats.cancelled += 1,
                }
                stats.revenue += order.total();
                stats
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StaffStats {
    pub total_staff: usize,
    pub active_count: usize,
    pub off_duty_count: usize,
    pub on_leave_count: usize,
}

impl Aggregate for StaffRecord {
    type Stats = StaffStats;

    fn aggregate<'a, I>(records: I) -> StaffStats
    where
        I: IntoIterator<Item = &'a Self>,
    {
        records
            .into_iter()
            .fold(StaffStats::default(), |mut stats, member| {
                stats.total_staff += 1;
                match member.status {
                    StaffStatus::Active => stats.active_count += 1,
                    StaffStatus::OffDuty => stats.off_duty_count += 1,
                    StaffStatus::OnLeave => stats.on_leave_count += 1,
                }
                stats
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub total_tables: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub cleaning: usize,
    pub seats_in_use: u32,
    pub seat_capacity: u32,
}

impl TableStats {
    /// Share of tables with status Occupied; 0 when there are no tables.
    #[must_use]
    pub fn occupancy_ratio(&self) -> f64 {
        ratio(self.occupied, self.total_tables)
    }

    /// Share of seats filled across all tables; 0 when there are no seats.
    #[must_use]
    pub fn seat_ratio(&self) -> f64 {
        ratio(self.seats_in_use as usize, self.seat_capacity as usize)
    }

    #[must_use]
    pub const fn count(&self, status: TableStatus) -> usize {
        match status {
            TableStatus::Available => self.available,
            TableStatus::Occupied => self.occupied,
            TableStatus::Reserved => self.reserved,
            TableStatus::Cleaning => self.cleaning,
        }
    }
}

impl Aggregate for TableRecord {
    type Stats = TableStats;

    fn aggregate<'a, I>(records: I) -> TableStats
    where
        I: IntoIterator<Item = &'a Self>,
    {
        records
            .into_iter()
            .fold(TableStats::default(), |mut stats, table| {
                stats.total_tables += 1;
                match table.status {
                    TableStatus::Available => stats.available += 1,
                    TableStatus::Occupied => stats.occupied += 1,
                    TableStatus::Reserved => stats.reserved += 1,
                    TableStatus::Cleaning => stats.cleaning += 1,
                }
                stats.seats_in_use = stats.seats_in_use.saturating_add(table.current_occupancy);
                stats.seat_capacity = stats.seat_capacity.saturating_add(table.capacity);
                stats
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MenuStats {
    pub total_items: usize,
    pub available_count: usize,
    pub vegetarian_count: usize,
    pub spicy_count: usize,
}

impl Aggregate for MenuRecord {
    type Stats = MenuStats;

    fn aggregate<'a, I>(records: I) -> MenuStats
    where
        I: IntoIterator<Item = &'a Self>,
    {
        records.into_iter().fold(MenuStats::default(), |mut stats, dish| {
            stats.total_items += 1;
            stats.available_count += usize::from(dish.is_available);
            stats.vegetarian_count += usize::from(dish.is_vegetarian);
            stats.spicy_count += usize::from(dish.is_spicy);
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn empty_collections_aggregate_to_zero() {
        assert_eq!(compute_aggregates::<InventoryRecord, _>(&[]), InventoryStats::default());
        assert_eq!(compute_aggregates::<OrderRecord, _>(&[]), OrderStats::default());
        assert_eq!(compute_aggregates::<StaffRecord, _>(&[]), StaffStats::default());
        assert_eq!(compute_aggregates::<MenuRecord, _>(&[]), MenuStats::default());

        let tables = compute_aggregates::<TableRecord, _>(&[]);
        assert_eq!(tables.total_tables, 0);
        assert!(tables.occupancy_ratio().abs() < f64::EPSILON);
        assert!(tables.seat_ratio().abs() < f64::EPSILON);
        assert_eq!(revenue(&[]), Money::ZERO);
    }

    #[test]
    fn inventory_fixture_stats() {
        let stats = compute_aggregates(&fixtures::inventory());
        assert_eq!(stats.total_items, 10);
        assert_eq!(stats.low_stock_count, 0);
    }

    #[test]
    fn staff_fixture_stats() {
        let stats = compute_aggregates(&fixtures::staff());
        assert_eq!(stats.total_staff, 5);
        assert_eq!(stats.active_count, 3);
        assert_eq!(stats.off_duty_count, 1);
        assert_eq!(stats.on_leave_count, 1);
    }

    #[test]
    fn table_fixture_stats() {
        let stats = compute_aggregates(&fixtures::tables());
        assert_eq!(stats.total_tables, 8);
        assert_eq!(stats.occupied, 2);
        assert_eq!(stats.available, 3);
        assert_eq!(stats.seats_in_use, 7);
        assert_eq!(stats.seat_capacity, 34);
        assert!((stats.occupancy_ratio() - 0.25).abs() < f64::EPSILON);
        assert_eq!(percent(stats.occupancy_ratio()), 25);
    }

    #[test]
    fn order_fixture_stats() {
        let stats = compute_aggregates(&fixtures::orders_at(0));
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.count(OrderStatus::New), 1);
        assert_eq!(stats.pending(), 3);
        // 799.94 + 669.95 + 549.98
        assert_eq!(stats.revenue.to_string(), "2019.87");
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(12.0 / 18.0), 67);
        assert_eq!(percent(0.125), 13);
        assert_eq!(percent(0.0), 0);
        assert_eq!(percent(f64::NAN), 0);
        assert_eq!(percent(1.0), 100);
    }

    #[test]
    fn seat_totals_saturate() {
        let tables = vec![
            TableRecord::new(1, u32::MAX, TableStatus::Occupied).seated(u32::MAX),
            TableRecord::new(2, u32::MAX, TableStatus::Occupied).seated(u32::MAX),
        ];
        let stats = compute_aggregates(&tables);
        assert_eq!(stats.seats_in_use, u32::MAX);
        assert_eq!(stats.seat_capacity, u32::MAX);
        assert_eq!(stats.occupied, 2);
    }
}
