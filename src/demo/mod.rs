use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

/// Section of the demo dataset addressable through the `type` query
/// parameter. The URL form is kebab-case (`time-entries`), the JSON key it
/// maps to is camelCase (`timeEntries`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSection {
    Clients,
    Projects,
    Stats,
    TimeEntries,
    Invoices,
}

impl DemoSection {
    /// Parse the query parameter form. Anything unrecognized is `None`,
    /// which callers treat as a request for the full dataset.
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "clients" => Some(DemoSection::Clients),
            "projects" => Some(DemoSection::Projects),
            "stats" => Some(DemoSection::Stats),
            "time-entries" => Some(DemoSection::TimeEntries),
            "invoices" => Some(DemoSection::Invoices),
            _ => None,
        }
    }

    /// JSON key this section is published under.
    pub fn key(&self) -> &'static str {
        match self {
            DemoSection::Clients => "clients",
            DemoSection::Projects => "projects",
            DemoSection::Stats => "stats",
            DemoSection::TimeEntries => "timeEntries",
            DemoSection::Invoices => "invoices",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoClient {
    pub id: u32,
    pub name: &'static str,
    pub industry: &'static str,
    pub status: &'static str,
    pub contact_name: &'static str,
    pub contact_email: &'static str,
    pub monthly_retainer: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoProject {
    pub id: u32,
    pub client_id: u32,
    pub name: &'static str,
    pub status: &'static str,
    pub budget: Decimal,
    pub hours_logged: Decimal,
    pub due_date: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoStats {
    pub active_clients: u32,
    pub open_projects: u32,
    pub unbilled_hours: Decimal,
    pub outstanding_invoices: Decimal,
    pub revenue_this_month: Decimal,
    pub hours_this_week: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoTimeEntry {
    pub id: u32,
    pub project_id: u32,
    pub date: &'static str,
    pub hours: Decimal,
    pub description: &'static str,
    pub billable: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoInvoice {
    pub id: u32,
    pub client_id: u32,
    pub number: &'static str,
    pub amount: Decimal,
    pub status: &'static str,
    pub issued_date: &'static str,
    pub due_date: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoData {
    pub clients: Vec<DemoClient>,
    pub projects: Vec<DemoProject>,
    pub stats: DemoStats,
    pub time_entries: Vec<DemoTimeEntry>,
    pub invoices: Vec<DemoInvoice>,
}

/// The entire client-portal demo dataset. Static and read-only, so repeated
/// requests always see identical values.
pub static DEMO_DATA: Lazy<DemoData> = Lazy::new(build_demo_data);

fn build_demo_data() -> DemoData {
    DemoData {
        clients: vec![
            DemoClient {
                id: 1,
                name: "Northwind Logistics",
                industry: "Transportation",
                status: "active",
                contact_name: "Dana Calloway",
                contact_email: "dana@northwind.example.com",
                monthly_retainer: Decimal::new(450000, 2),
            },
            DemoClient {
                id: 2,
                name: "Harbor Light Media",
                industry: "Publishing",
                status: "active",
                contact_name: "Miguel Reyes",
                contact_email: "miguel@harborlight.example.com",
                monthly_retainer: Decimal::new(280000, 2),
            },
            DemoClient {
                id: 3,
                name: "Cedar Peak Outfitters",
                industry: "Retail",
                status: "active",
                contact_name: "June Abara",
                contact_email: "june@cedarpeak.example.com",
                monthly_retainer: Decimal::new(175000, 2),
            },
            DemoClient {
                id: 4,
                name: "Bluestem Analytics",
                industry: "Software",
                status: "paused",
                contact_name: "Priya Natarajan",
                contact_email: "priya@bluestem.example.com",
                monthly_retainer: Decimal::new(0, 2),
            },
        ],
        projects: vec![
            DemoProject {
                id: 1,
                client_id: 1,
                name: "Fleet dashboard rebuild",
                status: "in-progress",
                budget: Decimal::new(2400000, 2),
                hours_logged: Decimal::new(8650, 2),
                due_date: "2026-10-15",
            },
            DemoProject {
                id: 2,
                client_id: 2,
                name: "Subscriber portal",
                status: "in-progress",
                budget: Decimal::new(1800000, 2),
                hours_logged: Decimal::new(4125, 2),
                due_date: "2026-11-01",
            },
            DemoProject {
                id: 3,
                client_id: 3,
                name: "Holiday campaign site",
                status: "planning",
                budget: Decimal::new(900000, 2),
                hours_logged: Decimal::new(600, 2),
                due_date: "2026-11-20",
            },
            DemoProject {
                id: 4,
                client_id: 1,
                name: "Driver onboarding flow",
                status: "completed",
                budget: Decimal::new(1200000, 2),
                hours_logged: Decimal::new(11875, 2),
                due_date: "2026-07-31",
            },
        ],
        stats: DemoStats {
            active_clients: 3,
            open_projects: 3,
            unbilled_hours: Decimal::new(6425, 2),
            outstanding_invoices: Decimal::new(1630000, 2),
            revenue_this_month: Decimal::new(2120000, 2),
            hours_this_week: Decimal::new(3150, 2),
        },
        time_entries: vec![
            DemoTimeEntry {
                id: 1,
                project_id: 1,
                date: "2026-08-17",
                hours: Decimal::new(650, 2),
                description: "Route map clustering and filters",
                billable: true,
            },
            DemoTimeEntry {
                id: 2,
                project_id: 1,
                date: "2026-08-18",
                hours: Decimal::new(425, 2),
                description: "Dispatch alert thresholds",
                billable: true,
            },
            DemoTimeEntry {
                id: 3,
                project_id: 2,
                date: "2026-08-18",
                hours: Decimal::new(800, 2),
                description: "Paywall entitlement checks",
                billable: true,
            },
            DemoTimeEntry {
                id: 4,
                project_id: 3,
                date: "2026-08-19",
                hours: Decimal::new(300, 2),
                description: "Campaign wireframe review",
                billable: false,
            },
            DemoTimeEntry {
                id: 5,
                project_id: 2,
                date: "2026-08-20",
                hours: Decimal::new(975, 2),
                description: "Checkout integration spike",
                billable: true,
            },
        ],
        invoices: vec![
            DemoInvoice {
                id: 1,
                client_id: 1,
                number: "INV-2026-041",
                amount: Decimal::new(880000, 2),
                status: "paid",
                issued_date: "2026-07-01",
                due_date: "2026-07-31",
            },
            DemoInvoice {
                id: 2,
                client_id: 2,
                number: "INV-2026-042",
                amount: Decimal::new(640000, 2),
                status: "sent",
                issued_date: "2026-08-01",
                due_date: "2026-08-31",
            },
            DemoInvoice {
                id: 3,
                client_id: 3,
                number: "INV-2026-043",
                amount: Decimal::new(390000, 2),
                status: "sent",
                issued_date: "2026-08-05",
                due_date: "2026-09-04",
            },
            DemoInvoice {
                id: 4,
                client_id: 1,
                number: "INV-2026-038",
                amount: Decimal::new(600000, 2),
                status: "overdue",
                issued_date: "2026-06-01",
                due_date: "2026-07-01",
            },
        ],
    }
}

/// Build the response body for the demo endpoint.
///
/// A recognized section yields an object with that section as its only key;
/// `None` yields the full dataset with all five keys.
pub fn demo_payload(section: Option<DemoSection>) -> Value {
    let data = &*DEMO_DATA;

    match section {
        None => serde_json::to_value(data).unwrap_or(Value::Null),
        Some(section) => {
            let value = match section {
                DemoSection::Clients => serde_json::to_value(&data.clients),
                DemoSection::Projects => serde_json::to_value(&data.projects),
                DemoSection::Stats => serde_json::to_value(&data.stats),
                DemoSection::TimeEntries => serde_json::to_value(&data.time_entries),
                DemoSection::Invoices => serde_json::to_value(&data.invoices),
            }
            .unwrap_or(Value::Null);

            let mut body = Map::with_capacity(1);
            body.insert(section.key().to_string(), value);
            Value::Object(body)
        }
    }
}
