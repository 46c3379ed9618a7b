//! Built-in payloads for `run-all`, one per report type.

use chrono::NaiveDate;
use showroom_reports::model::{
    BrandSales, CustomerMetrics, IntentCount, Kpis, OperationalMetrics, RecentSale, SaleDetail,
    StaffPerformance, TrendPoint, Vehicle, WhatsappAnalytics,
};
use showroom_reports::{ReportConfig, ReportData, ReportPeriod, ReportType};

const TENANT: &str = "Maju Motor Showroom";

pub fn sample_config(report_type: ReportType) -> ReportConfig {
    ReportConfig::new(report_type, TENANT)
        .with_period(ReportPeriod {
            start: NaiveDate::from_ymd_opt(2026, 9, 1),
            end: NaiveDate::from_ymd_opt(2026, 9, 30),
            label: None,
        })
        .with_data(sample_data())
}

fn sample_data() -> ReportData {
    ReportData {
        total_sales: Some(48.0),
        total_revenue: Some(9_360_000_000.0),
        total_inventory: Some(126.0),
        average_price: None,
        sales_by_brand: Some(brands()),
        staff_performance: Some(staff()),
        low_stock_vehicles: Some(low_stock()),
        inventory: Some(inventory()),
        recent_sales: Some(recent_sales()),
        sales_trend: Some(trend()),
        kpis: Some(Kpis {
            inventory_turnover: Some(38.0),
            conversion_rate: Some(12.5),
            sales_growth: Some(8.4),
            customer_retention: Some(41.0),
            stock_availability: Some(87.0),
            avg_days_to_sell: Some(34.0),
        }),
        whatsapp: Some(WhatsappAnalytics {
            total_conversations: Some(640.0),
            active_conversations: Some(58.0),
            total_messages: Some(5_210.0),
            ai_responses: Some(4_870.0),
            response_rate: Some(96.0),
            avg_response_time: Some(4.2),
            escalation_rate: Some(11.0),
            intent_breakdown: Some(vec![
                intent("Tanya Harga", 240.0),
                intent("Ketersediaan Unit", 180.0),
                intent("Test Drive", 110.0),
                intent("Kredit", 70.0),
                intent("Lainnya", 40.0),
            ]),
        }),
        customers: Some(CustomerMetrics {
            total_leads: Some(310.0),
            new_leads: Some(122.0),
            converted_leads: Some(48.0),
            conversion_rate: Some(15.5),
            returning_customers: Some(19.0),
        }),
        operations: Some(OperationalMetrics {
            avg_days_in_stock: Some(42.0),
            vehicles_added: Some(55.0),
            vehicles_sold: Some(48.0),
            pending_deliveries: Some(6.0),
        }),
    }
}

fn brands() -> Vec<BrandSales> {
    [
        ("Toyota", 16.0, 3_120_000_000.0),
        ("Honda", 11.0, 2_090_000_000.0),
        ("Mitsubishi", 8.0, 1_760_000_000.0),
        ("Suzuki", 7.0, 1_050_000_000.0),
        ("Daihatsu", 4.0, 720_000_000.0),
        ("Hyundai", 2.0, 620_000_000.0),
    ]
    .into_iter()
    .map(|(brand, count, revenue)| BrandSales {
        brand: Some(brand.to_string()),
        count: Some(count),
        revenue: Some(revenue),
    })
    .collect()
}

fn staff() -> Vec<StaffPerformance> {
    [
        ("Rina", 14.0, 2_810_000_000.0),
        ("Budi", 12.0, 2_300_000_000.0),
        ("Sari", 10.0, 1_940_000_000.0),
        ("Agus", 7.0, 1_330_000_000.0),
        ("Dewi", 5.0, 980_000_000.0),
    ]
    .into_iter()
    .map(|(name, sales, revenue)| StaffPerformance {
        name: Some(name.to_string()),
        sales: Some(sales),
        revenue: Some(revenue),
        performance: None,
        details: Some(vec![SaleDetail {
            vehicle: Some("Toyota Avanza 1.5 G".to_string()),
            price: Some(245_000_000.0),
            date: NaiveDate::from_ymd_opt(2026, 9, 12),
        }]),
    })
    .collect()
}

fn vehicle(make: &str, model: &str, year: f64, price: f64, stock: f64, days: f64) -> Vehicle {
    Vehicle {
        make: Some(make.to_string()),
        model: Some(model.to_string()),
        year: Some(year),
        price: Some(price),
        stock: Some(stock),
        days_in_stock: Some(days),
        status: Some("Tersedia".to_string()),
        photo_url: None,
    }
}

fn low_stock() -> Vec<Vehicle> {
    vec![
        vehicle("Toyota", "Fortuner VRZ", 2024.0, 560_000_000.0, 1.0, 21.0),
        vehicle("Honda", "HR-V SE", 2023.0, 410_000_000.0, 2.0, 47.0),
        vehicle("Suzuki", "Ertiga Hybrid", 2024.0, 275_000_000.0, 1.0, 12.0),
    ]
}

fn inventory() -> Vec<Vehicle> {
    let mut vehicles = low_stock();
    vehicles.extend([
        vehicle("Toyota", "Avanza 1.5 G", 2024.0, 245_000_000.0, 6.0, 18.0),
        vehicle("Mitsubishi", "Xpander Ultimate", 2023.0, 320_000_000.0, 4.0, 66.0),
        vehicle("Daihatsu", "Terios R", 2022.0, 230_000_000.0, 3.0, 81.0),
        vehicle("Hyundai", "Creta Prime", 2024.0, 390_000_000.0, 5.0, 9.0),
    ]);
    vehicles
}

fn recent_sales() -> Vec<RecentSale> {
    (1..=8)
        .map(|day| RecentSale {
            vehicle: Some(format!("Toyota Avanza 1.5 G #{day}")),
            price: Some(240_000_000.0 + f64::from(day) * 1_500_000.0),
            date: NaiveDate::from_ymd_opt(2026, 9, day * 3),
            staff_name: Some("Rina".to_string()),
            customer_name: Some(format!("Pelanggan {day}")),
        })
        .collect()
}

fn trend() -> Vec<TrendPoint> {
    [("Minggu 1", 9.0), ("Minggu 2", 13.0), ("Minggu 3", 11.0), ("Minggu 4", 15.0)]
        .into_iter()
        .map(|(label, count)| TrendPoint {
            label: Some(label.to_string()),
            count: Some(count),
            revenue: Some(count * 195_000_000.0),
        })
        .collect()
}

fn intent(name: &str, count: f64) -> IntentCount {
    IntentCount {
        intent: Some(name.to_string()),
        count: Some(count),
        percentage: None,
    }
}
