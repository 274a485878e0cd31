//! 簡單配送模擬示例

use fleetsim::{Order, Route, SimulationConfig, SimulationRequest, Simulator, TrafficLevel};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 簡單配送模擬示例 ===\n");

    // 建立路線目錄
    let routes = vec![
        Route::new("RT-01".to_string(), Decimal::from(4), TrafficLevel::Low, 20),
        Route::new("RT-02".to_string(), Decimal::from(10), TrafficLevel::High, 30),
    ];

    // 建立訂單目錄
    let orders = vec![
        Order::new("ORD-001".to_string(), Decimal::from(800)).with_route_id("RT-01".to_string()),
        Order::new("ORD-002".to_string(), Decimal::from(1200)).with_route_id("RT-02".to_string()),
        Order::new("ORD-003".to_string(), Decimal::from(450)).with_route_id("RT-02".to_string()),
    ];

    println!("訂單清單:");
    for order in &orders {
        println!(
            "  - 訂單: {}, 金額: Rs {}, 路線: {}",
            order.order_id,
            order.value_rs,
            order.route_id.as_deref().unwrap_or("(未指派)")
        );
    }

    // 執行模擬：2 名司機、09:00 開始、最多 8 小時
    let request = SimulationRequest::from_parts(2, "09:00", 8)?;
    let simulator = Simulator::new(SimulationConfig::default());
    let result = simulator.simulate(&request, &orders, &routes)?;

    println!("\n模擬結果:");
    println!("  總利潤:   Rs {}", result.total_profit);
    println!("  效率分數: {}%", result.efficiency_score);
    println!("  準時:     {} 筆", result.on_time_deliveries);
    println!("  遲到:     {} 筆", result.late_deliveries);
    println!(
        "  燃料成本: Low Rs {} / Medium Rs {} / High Rs {}",
        result.fuel_costs.low, result.fuel_costs.medium, result.fuel_costs.high
    );

    Ok(())
}
