//! 儀表板統計報告示例
//!
//! 模擬一次後彙編 `/api/stats` 形狀的報告並輸出 JSON

use chrono::Utc;
use fleetsim::{
    Driver, Order, Route, SimulationConfig, SimulationRequest, Simulator, StatsReport,
    TrafficLevel,
};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 儀表板統計報告示例 ===\n");

    let routes = vec![
        Route::new("RT-01".to_string(), Decimal::from(4), TrafficLevel::Low, 20),
        Route::new("RT-02".to_string(), Decimal::from(10), TrafficLevel::High, 30),
    ];
    let orders = vec![
        Order::new("ORD-001".to_string(), Decimal::from(1500)).with_route_id("RT-01".to_string()),
        Order::new("ORD-002".to_string(), Decimal::from(700)).with_route_id("RT-02".to_string()),
        Order::new("ORD-003".to_string(), Decimal::from(2200)).with_route_id("RT-02".to_string()),
    ];
    let drivers = vec![
        Driver::new("Amit".to_string()).with_current_shift_hours(Decimal::from(4)),
        Driver::new("Priya".to_string()).with_past_week_hours(vec![
            Decimal::from(8),
            Decimal::new(75, 1),
            Decimal::from(9),
        ]),
    ];

    let config = SimulationConfig::default();
    let simulator = Simulator::new(config.clone());
    let request = SimulationRequest::from_parts(2, "09:00", 8)?;
    let result = simulator.simulate(&request, &orders, &routes)?;

    let report = StatsReport::compile(
        &orders,
        &drivers,
        &routes,
        Some(&result),
        &config,
        Utc::now(),
    );

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
