//! Static sample market rates. Not live data.

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketRate {
    pub service_type: &'static str,
    pub entry_level: f64,
    pub mid_level: f64,
    pub expert_level: f64,
}

pub const MARKET_RATES: &[MarketRate] = &[
    MarketRate { service_type: "Email Automation", entry_level: 25.0, mid_level: 50.0, expert_level: 90.0 },
    MarketRate { service_type: "Social Media Automation", entry_level: 30.0, mid_level: 60.0, expert_level: 100.0 },
    MarketRate { service_type: "Data Processing", entry_level: 20.0, mid_level: 45.0, expert_level: 85.0 },
    MarketRate { service_type: "Workflow Automation", entry_level: 35.0, mid_level: 70.0, expert_level: 120.0 },
    MarketRate { service_type: "ChatBot Creation", entry_level: 40.0, mid_level: 80.0, expert_level: 150.0 },
    MarketRate { service_type: "Document Automation", entry_level: 25.0, mid_level: 55.0, expert_level: 95.0 },
    MarketRate { service_type: "Lead Generation", entry_level: 30.0, mid_level: 65.0, expert_level: 110.0 },
    MarketRate { service_type: "Customer Service Automation", entry_level: 35.0, mid_level: 75.0, expert_level: 130.0 },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarketTrend {
    pub topic: &'static str,
    pub insight: &'static str,
}

pub const MARKET_TRENDS: &[MarketTrend] = &[
    MarketTrend {
        topic: "Highest Growth Areas",
        insight: "AI-powered automation, document processing, and customer service automation",
    },
    MarketTrend {
        topic: "Premium Skills",
        insight: "LLM integration, multi-system workflows, and security-focused automations",
    },
    MarketTrend {
        topic: "Pricing Models Shift",
        insight: "Moving from hourly to value-based and subscription models",
    },
];

pub const STAND_OUT_TIPS: &[&str] = &[
    "Develop a specialty in high-demand automation niches",
    "Create case studies that demonstrate ROI of your automation services",
    "Offer tiered service packages with clear deliverables",
    "Provide educational content to attract potential clients",
    "Build a portfolio of automation templates that showcase your capabilities",
];

fn service_key(name: &str) -> String {
    let name = name.trim().to_ascii_lowercase();
    match name.strip_suffix(" automation") {
        Some(stem) => stem.trim_end().to_string(),
        None => name,
    }
}

/// Case-insensitive lookup by service type. A trailing "Automation" is
/// ignored, so catalog names like "Lead Generation Automation" find their row.
pub fn rate_for(service_type: &str) -> Option<&'static MarketRate> {
    let key = service_key(service_type);
    MARKET_RATES
        .iter()
        .find(|rate| service_key(rate.service_type) == key)
}

/// `MARKET_RATES` as a bordered terminal table.
pub fn render_rates_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Service Type"),
        Cell::new("Entry Level"),
        Cell::new("Mid Level"),
        Cell::new("Expert Level"),
    ]);

    for rate in MARKET_RATES {
        table.add_row(vec![
            Cell::new(rate.service_type),
            Cell::new(format!("${:.0}", rate.entry_level)).set_alignment(CellAlignment::Right),
            Cell::new(format!("${:.0}", rate.mid_level)).set_alignment(CellAlignment::Right),
            Cell::new(format!("${:.0}", rate.expert_level)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
