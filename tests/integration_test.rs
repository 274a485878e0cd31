//! 集成測試

use chrono::{DateTime, Utc};
use fleetsim::{
    AssignmentStrategy, Driver, ErrorBody, Order, Route, SimError, SimulateRequestDto,
    SimulateResponseDto, SimulationConfig, SimulationRequest, Simulator, StatsReport,
    TrafficLevel,
};
use rust_decimal::Decimal;

fn high_traffic_catalog() -> (Vec<Order>, Vec<Route>) {
    // 單一高交通路線：10 公里、基礎 30 分鐘
    let routes = vec![Route::new(
        "RT-01".to_string(),
        Decimal::from(10),
        TrafficLevel::High,
        30,
    )];

    let orders = vec![
        Order::new("ORD-001".to_string(), Decimal::from(500)).with_route_id("RT-01".to_string()),
        Order::new("ORD-002".to_string(), Decimal::from(800)).with_route_id("RT-01".to_string()),
        Order::new("ORD-003".to_string(), Decimal::from(1200)).with_route_id("RT-01".to_string()),
    ];

    (orders, routes)
}

#[test]
fn test_single_driver_two_hour_shift() {
    // 場景：3 筆高交通訂單、1 名司機、09:00 開始、最多 2 小時
    // 每筆 30 × 1.5 = 45 分鐘，累計 45 / 90 / 135 → 前兩筆準時、第三筆遲到

    let (orders, routes) = high_traffic_catalog();
    let simulator = Simulator::new(SimulationConfig::default());
    let request = SimulationRequest::from_parts(1, "09:00", 2).unwrap();

    let result = simulator.simulate(&request, &orders, &routes).unwrap();

    assert_eq!(result.on_time_deliveries, 2);
    assert_eq!(result.late_deliveries, 1);
    assert_eq!(result.assigned_deliveries(), 3);
    assert_eq!(result.efficiency_score, 67); // 2/3 → 66.7 → 67

    // 燃料全部落在高交通：3 × 10 km × (5 + 2) Rs/km
    assert_eq!(result.fuel_costs.get(TrafficLevel::High), Decimal::from(210));
    assert_eq!(result.fuel_costs.get(TrafficLevel::Low), Decimal::ZERO);
    assert_eq!(result.fuel_costs.get(TrafficLevel::Medium), Decimal::ZERO);

    // 預設配置：利潤 = 訂單金額 2500 − 燃料 210
    assert_eq!(result.total_profit, Decimal::from(2290));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_longer_shift_clears_all_lateness() {
    let (orders, routes) = high_traffic_catalog();
    let simulator = Simulator::new(SimulationConfig::default());

    // 3 小時窗口（180 分鐘）足以涵蓋累計 135 分鐘
    let request = SimulationRequest::from_parts(1, "09:00", 3).unwrap();
    let result = simulator.simulate(&request, &orders, &routes).unwrap();

    assert_eq!(result.on_time_deliveries, 3);
    assert_eq!(result.late_deliveries, 0);
    assert_eq!(result.efficiency_score, 100);
}

#[test]
fn test_more_drivers_spread_the_load() {
    let (orders, routes) = high_traffic_catalog();
    let simulator = Simulator::new(SimulationConfig::default());

    // 3 名司機分攤後每人一筆 45 分鐘，1 小時窗口也全數準時
    let request = SimulationRequest::from_parts(3, "09:00", 1).unwrap();
    let result = simulator.simulate(&request, &orders, &routes).unwrap();

    assert_eq!(result.on_time_deliveries, 3);
    assert_eq!(result.late_deliveries, 0);
}

#[test]
fn test_greedy_by_route_end_to_end() {
    let routes = vec![
        Route::new("RT-01".to_string(), Decimal::from(4), TrafficLevel::Low, 20),
        Route::new("RT-02".to_string(), Decimal::from(10), TrafficLevel::High, 30),
    ];
    let orders = vec![
        Order::new("ORD-001".to_string(), Decimal::from(600)).with_route_id("RT-01".to_string()),
        Order::new("ORD-002".to_string(), Decimal::from(700)).with_route_id("RT-02".to_string()),
        Order::new("ORD-003".to_string(), Decimal::from(900)).with_route_id("RT-01".to_string()),
        Order::new("ORD-004".to_string(), Decimal::from(400)).with_route_id("RT-02".to_string()),
    ];

    let config =
        SimulationConfig::default().with_assignment_strategy(AssignmentStrategy::GreedyByRoute);
    let simulator = Simulator::new(config);
    let request = SimulationRequest::from_parts(2, "08:00", 8).unwrap();

    let result = simulator.simulate(&request, &orders, &routes).unwrap();

    assert_eq!(result.assigned_deliveries(), 4);
    // 低交通 2 × 4 × 5 = 40；高交通 2 × 10 × 7 = 140
    assert_eq!(result.fuel_costs.get(TrafficLevel::Low), Decimal::from(40));
    assert_eq!(result.fuel_costs.get(TrafficLevel::High), Decimal::from(140));
}

#[test]
fn test_simulate_endpoint_round_trip() {
    // 模擬 `POST /api/simulate` 的完整流程：請求本體 → 引擎 → 回應本體
    let (orders, routes) = high_traffic_catalog();

    let body = r#"{"drivers": 1, "startTime": "09:00", "maxHours": 2}"#;
    let dto: SimulateRequestDto = serde_json::from_str(body).unwrap();
    let request = dto.into_request().unwrap();

    let simulator = Simulator::new(SimulationConfig::default());
    let result = simulator.simulate(&request, &orders, &routes).unwrap();

    let response = SimulateResponseDto::from(&result);
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["totalProfit"], serde_json::json!("2290"));
    assert_eq!(value["efficiencyScore"], serde_json::json!(67));
    assert_eq!(value["onTimeDeliveries"], serde_json::json!(2));
    assert_eq!(value["lateDeliveries"], serde_json::json!(1));
    assert_eq!(value["fuelCosts"]["High"], serde_json::json!("210"));
    assert_eq!(value["fuelCosts"]["Low"], serde_json::json!("0"));
}

#[test]
fn test_simulate_endpoint_validation_failure() {
    let body = r#"{"drivers": 0, "startTime": "09:00", "maxHours": 8}"#;
    let dto: SimulateRequestDto = serde_json::from_str(body).unwrap();

    let err = dto.into_request().unwrap_err();
    assert!(matches!(err, SimError::Validation(_)));
    assert_eq!(fleet_api::http_status(&err), 400);

    let error_body = ErrorBody::from_error(&err);
    let value = serde_json::to_value(&error_body).unwrap();
    assert!(value["error"].as_str().unwrap().contains("司機數量"));
}

#[test]
fn test_catalog_feed_to_simulation() {
    // 從外部 CRUD 服務的 JSON 載荷一路跑到 KPI
    let orders_payload = r#"[
        {"_id": "a1", "orderId": "ORD-001", "valueRs": 500,
         "route": {"_id": "r1", "routeId": "RT-01"}},
        {"_id": "a2", "orderId": "ORD-002", "valueRs": 800,
         "route": {"_id": "r1", "routeId": "RT-01"}}
    ]"#;
    let routes_payload = r#"[
        {"_id": "r1", "routeId": "RT-01", "distanceKm": 10,
         "trafficLevel": "High", "baseTimeMin": 30}
    ]"#;

    let orders = fleet_api::parse_orders(orders_payload).unwrap();
    let routes = fleet_api::parse_routes(routes_payload).unwrap();

    let simulator = Simulator::new(SimulationConfig::default());
    let request = SimulationRequest::from_parts(1, "09:00", 2).unwrap();
    let result = simulator.simulate(&request, &orders, &routes).unwrap();

    assert_eq!(result.assigned_deliveries(), 2);
    assert_eq!(result.on_time_deliveries, 2); // 45 + 45 = 90 ≤ 120
    assert_eq!(result.fuel_costs.get(TrafficLevel::High), Decimal::from(140));
}

#[test]
fn test_stats_report_after_simulation() {
    let (orders, routes) = high_traffic_catalog();
    let drivers = vec![
        Driver::new("Amit".to_string()).with_current_shift_hours(Decimal::from(4)),
        Driver::new("Priya".to_string()),
    ];

    let config = SimulationConfig::default();
    let simulator = Simulator::new(config.clone());
    let request = SimulationRequest::from_parts(1, "09:00", 2).unwrap();
    let result = simulator.simulate(&request, &orders, &routes).unwrap();

    let generated_at: DateTime<Utc> = "2025-08-13T05:42:49Z".parse().unwrap();
    let report = StatsReport::compile(
        &orders,
        &drivers,
        &routes,
        Some(&result),
        &config,
        generated_at,
    );

    assert_eq!(report.totals.orders, 3);
    assert_eq!(report.totals.drivers, 2);
    assert_eq!(report.totals.routes, 1);
    assert_eq!(
        report.totals.average_order_value,
        Decimal::from(2500) / Decimal::from(3)
    );
    assert_eq!(report.performance.profit, result.total_profit);
    assert_eq!(report.performance.on_time, 2);
    assert_eq!(report.costs.fuel.get(TrafficLevel::High), Decimal::from(210));
    assert_eq!(report.timestamp, generated_at);
}

#[test]
fn test_refresh_cycle_drives_reruns() {
    use fleetsim::RefreshCycle;

    let (orders, routes) = high_traffic_catalog();
    let simulator = Simulator::new(SimulationConfig::default());

    let mut cycle = RefreshCycle::new();
    cycle.arm(SimulationRequest::from_parts(1, "09:00", 2).unwrap());

    // 第一輪
    let request = cycle.begin().unwrap();
    let first = simulator.simulate(&request, &orders, &routes).unwrap();
    assert!(cycle.begin().is_none()); // 執行中不重疊
    cycle.complete();

    // 成功後自動重新排程，重跑結果一致
    let request = cycle.begin().unwrap();
    let second = simulator.simulate(&request, &orders, &routes).unwrap();
    assert_eq!(first, second);

    cycle.cancel();
    assert!(cycle.begin().is_none());
}
