//! 車隊規模假設分析完整範例
//!
//! 展示同一目錄在不同司機數量下的 KPI 變化

use fleetsim::{Order, Route, SimulationConfig, SimulationRequest, Simulator, TrafficLevel};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("===== Fleet What-if Analysis =====\n");

    // 步驟 1: 建立路線目錄
    println!("[1] Create Route Catalog");
    let routes = create_routes();
    println!("    Routes: {}\n", routes.len());

    // 步驟 2: 建立訂單目錄
    println!("[2] Create Order Catalog");
    let orders = create_orders(&routes);
    println!("    Orders: {}\n", orders.len());

    // 步驟 3: 使用營運方激勵方案
    println!("[3] Configure Incentive Scheme");
    let config = SimulationConfig::incentive_scheme();
    println!("    Late penalty: Rs {}", config.late_penalty_rs);
    println!(
        "    High-value bonus: {}% over Rs {}\n",
        config.high_value_bonus_rate * Decimal::from(100),
        config.high_value_threshold_rs
    );

    // 步驟 4: 批次模擬 1 到 6 名司機
    println!("[4] Run Batch Simulation (1-6 drivers)");
    let requests: Vec<SimulationRequest> = (1..=6)
        .map(|drivers| SimulationRequest::from_parts(drivers, "08:00", 6))
        .collect::<Result<_, _>>()?;

    let simulator = Simulator::new(config);
    let outcomes = simulator.simulate_batch(&requests, &orders, &routes);

    println!("\n    Drivers | Profit (Rs) | Efficiency | On-time | Late");
    println!("    --------|-------------|------------|---------|-----");
    for (request, outcome) in requests.iter().zip(outcomes) {
        let result = outcome?;
        println!(
            "    {:>7} | {:>11} | {:>9}% | {:>7} | {:>4}",
            request.driver_count,
            result.total_profit,
            result.efficiency_score,
            result.on_time_deliveries,
            result.late_deliveries
        );
    }

    Ok(())
}

fn create_routes() -> Vec<Route> {
    vec![
        Route::new("RT-01".to_string(), Decimal::from(4), TrafficLevel::Low, 20),
        Route::new("RT-02".to_string(), Decimal::from(6), TrafficLevel::Medium, 25),
        Route::new("RT-03".to_string(), Decimal::from(10), TrafficLevel::High, 30),
        Route::new("RT-04".to_string(), Decimal::from(15), TrafficLevel::High, 45),
    ]
}

fn create_orders(routes: &[Route]) -> Vec<Order> {
    let values = [
        800, 1200, 450, 2000, 650, 1750, 300, 980, 1430, 520, 1100, 870,
    ];

    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let route = &routes[idx % routes.len()];
            Order::new(format!("ORD-{:03}", idx + 1), Decimal::from(*value))
                .with_route_id(route.route_id.clone())
        })
        .collect()
}
