//! 燃料成本計算

use std::collections::BTreeMap;

use fleet_core::{FuelCostBreakdown, Result, Route, SimError, SimulationConfig};
use rust_decimal::Decimal;

use crate::assignment::DriverSchedule;

/// 燃料成本計算器
pub struct FuelCalculator;

impl FuelCalculator {
    /// 計算單筆訂單的燃料成本（Rs）
    ///
    /// 距離乘上該交通等級的費率（基礎費率加附加費）。
    pub fn cost_for(route: &Route, config: &SimulationConfig) -> Decimal {
        route.distance_km * config.fuel_rate(route.traffic_level)
    }

    /// 按交通等級彙總所有排程的燃料成本
    pub fn aggregate(
        schedules: &[DriverSchedule],
        routes: &BTreeMap<String, Route>,
        config: &SimulationConfig,
    ) -> Result<FuelCostBreakdown> {
        let mut breakdown = FuelCostBreakdown::zero();

        for schedule in schedules {
            for order in &schedule.orders {
                let route_id = match order.route_id.as_deref() {
                    Some(route_id) => route_id,
                    None => continue,
                };
                let route = routes
                    .get(route_id)
                    .ok_or_else(|| SimError::UnknownRoute(route_id.to_string()))?;

                breakdown.add(route.traffic_level, Self::cost_for(route, config));
            }
        }

        Ok(breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::{Order, TrafficLevel};
    use rstest::rstest;

    #[rstest]
    #[case(TrafficLevel::Low, 50)] // 10 km × 5
    #[case(TrafficLevel::Medium, 50)] // 10 km × 5
    #[case(TrafficLevel::High, 70)] // 10 km × (5 + 2)
    fn test_cost_per_level(#[case] level: TrafficLevel, #[case] expected: u32) {
        let config = SimulationConfig::default();
        let route = Route::new("RT-X".to_string(), Decimal::from(10), level, 30);

        assert_eq!(
            FuelCalculator::cost_for(&route, &config),
            Decimal::from(expected)
        );
    }

    #[test]
    fn test_aggregate_groups_by_level() {
        let low = Route::new("RT-L".to_string(), Decimal::from(4), TrafficLevel::Low, 15);
        let high = Route::new("RT-H".to_string(), Decimal::from(10), TrafficLevel::High, 30);
        let mut routes = BTreeMap::new();
        routes.insert(low.route_id.clone(), low);
        routes.insert(high.route_id.clone(), high);

        let schedules = vec![
            DriverSchedule {
                driver_index: 0,
                orders: vec![
                    Order::new("ORD-001".to_string(), Decimal::from(300))
                        .with_route_id("RT-L".to_string()),
                    Order::new("ORD-002".to_string(), Decimal::from(900))
                        .with_route_id("RT-H".to_string()),
                ],
            },
            DriverSchedule {
                driver_index: 1,
                orders: vec![Order::new("ORD-003".to_string(), Decimal::from(700))
                    .with_route_id("RT-H".to_string())],
            },
        ];
        let config = SimulationConfig::default();

        let breakdown = FuelCalculator::aggregate(&schedules, &routes, &config).unwrap();

        assert_eq!(breakdown.get(TrafficLevel::Low), Decimal::from(20)); // 4 × 5
        assert_eq!(breakdown.get(TrafficLevel::Medium), Decimal::ZERO);
        assert_eq!(breakdown.get(TrafficLevel::High), Decimal::from(140)); // 2 × 10 × 7
        assert_eq!(breakdown.total(), Decimal::from(160));
    }

    #[test]
    fn test_empty_schedules_zero_cost() {
        let routes = BTreeMap::new();
        let config = SimulationConfig::default();

        let breakdown = FuelCalculator::aggregate(&[], &routes, &config).unwrap();
        assert_eq!(breakdown.total(), Decimal::ZERO);
    }
}
