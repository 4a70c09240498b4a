//! Demo dataset
//!
//! 32 events spread over the last 11 days, with creation times expressed as
//! ages relative to a reference instant so the dashboard always looks live.

use chrono::{DateTime, Duration, Utc};

use crate::error::DashboardResult;
use crate::types::{Category, Location, NewEvent, Severity};

use super::EventStore;

/// How long before the reference instant an event was created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Age {
    Days(i64),
    Hours(i64),
    Minutes(i64),
}

impl Age {
    pub fn before(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match *self {
            Age::Days(d) => now - Duration::days(d),
            Age::Hours(h) => now - Duration::hours(h),
            Age::Minutes(m) => now - Duration::minutes(m),
        }
    }
}

/// One literal demo record
pub struct SeedEvent {
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub age: Age,
    /// (lat, lng, city)
    pub location: (f64, f64, &'static str),
    /// (score, confidence, impact)
    pub metrics: (u8, f64, i64),
    pub tags: &'static [&'static str],
}

impl SeedEvent {
    fn to_new_event(&self) -> NewEvent {
        let (lat, lng, city) = self.location;
        let (score, confidence, impact) = self.metrics;
        NewEvent::new(
            self.title,
            self.description,
            self.category,
            self.severity,
            Location::new(lat, lng, Some(city.to_string())),
        )
        .with_metrics(score, confidence, impact)
        .with_tags(self.tags.iter().copied())
    }
}

/// Load [`DEMO_EVENTS`] into `store`, ids 1..=32 on an empty store
pub fn load_demo_events(store: &EventStore, now: DateTime<Utc>) -> DashboardResult<()> {
    for seed in DEMO_EVENTS {
        store.create_at(seed.to_new_event(), None, seed.age.before(now))?;
    }
    tracing::info!(count = DEMO_EVENTS.len(), "seeded demo events");
    Ok(())
}

pub const DEMO_EVENTS: &[SeedEvent] = &[
    SeedEvent {
        title: "Fraudulent Transaction Detected",
        description: "Multiple high-value transactions from unusual location detected in user account.",
        category: Category::Fraud,
        severity: Severity::High,
        age: Age::Days(2),
        location: (40.7128, -74.0060, "New York, NY"),
        metrics: (92, 0.95, 8500),
        tags: &["transaction", "high-risk", "automated-alert"],
    },
    SeedEvent {
        title: "Server Response Time Degradation",
        description: "API response times increased by 300% in the last hour.",
        category: Category::Ops,
        severity: Severity::High,
        age: Age::Hours(5),
        location: (37.7749, -122.4194, "San Francisco, CA"),
        metrics: (88, 0.92, 4200),
        tags: &["performance", "api", "urgent"],
    },
    SeedEvent {
        title: "Workplace Safety Incident",
        description: "Minor injury reported in warehouse facility, all protocols followed.",
        category: Category::Safety,
        severity: Severity::Medium,
        age: Age::Days(1),
        location: (41.8781, -87.6298, "Chicago, IL"),
        metrics: (65, 0.88, 1200),
        tags: &["warehouse", "injury", "compliance"],
    },
    SeedEvent {
        title: "Sales Conversion Drop",
        description: "Checkout conversion rate dropped 15% compared to last week.",
        category: Category::Sales,
        severity: Severity::Medium,
        age: Age::Days(3),
        location: (34.0522, -118.2437, "Los Angeles, CA"),
        metrics: (72, 0.89, 3500),
        tags: &["conversion", "checkout", "revenue"],
    },
    SeedEvent {
        title: "Health Check Failed",
        description: "Database health check failed, backup systems activated.",
        category: Category::Health,
        severity: Severity::High,
        age: Age::Hours(1),
        location: (47.6062, -122.3321, "Seattle, WA"),
        metrics: (95, 0.98, 6800),
        tags: &["database", "health-check", "critical"],
    },
    SeedEvent {
        title: "Marketing Campaign Performance",
        description: "Email campaign showing higher than expected engagement rates.",
        category: Category::Marketing,
        severity: Severity::Low,
        age: Age::Days(4),
        location: (42.3601, -71.0589, "Boston, MA"),
        metrics: (78, 0.85, 2100),
        tags: &["email", "engagement", "positive"],
    },
    SeedEvent {
        title: "Suspicious Account Activity",
        description: "Multiple failed login attempts from different IP addresses.",
        category: Category::Fraud,
        severity: Severity::Medium,
        age: Age::Days(6),
        location: (33.4484, -112.0740, "Phoenix, AZ"),
        metrics: (68, 0.82, 1800),
        tags: &["login", "security", "monitoring"],
    },
    SeedEvent {
        title: "Infrastructure Cost Spike",
        description: "Cloud infrastructure costs increased by 40% this week.",
        category: Category::Ops,
        severity: Severity::Medium,
        age: Age::Days(2),
        location: (39.7392, -104.9903, "Denver, CO"),
        metrics: (75, 0.90, 5200),
        tags: &["infrastructure", "cost", "budget"],
    },
    SeedEvent {
        title: "Equipment Maintenance Required",
        description: "Predictive maintenance alert for production line equipment.",
        category: Category::Safety,
        severity: Severity::Low,
        age: Age::Days(7),
        location: (29.7604, -95.3698, "Houston, TX"),
        metrics: (55, 0.75, 900),
        tags: &["maintenance", "equipment", "preventive"],
    },
    SeedEvent {
        title: "Record Sales Day",
        description: "Highest single-day sales in Q4, exceeding targets by 25%.",
        category: Category::Sales,
        severity: Severity::Low,
        age: Age::Days(5),
        location: (25.7617, -80.1918, "Miami, FL"),
        metrics: (98, 0.99, 12500),
        tags: &["sales", "record", "positive"],
    },
    SeedEvent {
        title: "System Uptime Achievement",
        description: "99.99% uptime maintained for 90 consecutive days.",
        category: Category::Health,
        severity: Severity::Low,
        age: Age::Days(8),
        location: (39.9526, -75.1652, "Philadelphia, PA"),
        metrics: (96, 0.97, 3200),
        tags: &["uptime", "reliability", "milestone"],
    },
    SeedEvent {
        title: "Ad Fraud Detection",
        description: "Bot traffic detected in advertising campaign, blocking initiated.",
        category: Category::Marketing,
        severity: Severity::High,
        age: Age::Days(1),
        location: (32.7767, -96.7970, "Dallas, TX"),
        metrics: (85, 0.91, 4800),
        tags: &["advertising", "fraud", "bot-detection"],
    },
    SeedEvent {
        title: "Data Center Temperature Alert",
        description: "Cooling system efficiency dropped, temperature rising in Zone B.",
        category: Category::Ops,
        severity: Severity::Medium,
        age: Age::Hours(3),
        location: (30.2672, -97.7431, "Austin, TX"),
        metrics: (70, 0.86, 2800),
        tags: &["datacenter", "cooling", "hardware"],
    },
    SeedEvent {
        title: "Employee Safety Training Completion",
        description: "98% of employees completed quarterly safety training.",
        category: Category::Safety,
        severity: Severity::Low,
        age: Age::Days(9),
        location: (37.3382, -121.8863, "San Jose, CA"),
        metrics: (92, 0.94, 1500),
        tags: &["training", "compliance", "positive"],
    },
    SeedEvent {
        title: "Payment Gateway Timeout",
        description: "Third-party payment processor experiencing intermittent timeouts.",
        category: Category::Ops,
        severity: Severity::High,
        age: Age::Hours(2),
        location: (45.5152, -122.6784, "Portland, OR"),
        metrics: (89, 0.93, 7200),
        tags: &["payment", "gateway", "timeout"],
    },
    SeedEvent {
        title: "Customer Churn Prediction",
        description: "ML model identified 50 high-risk customers likely to churn this month.",
        category: Category::Sales,
        severity: Severity::Medium,
        age: Age::Days(4),
        location: (36.1627, -86.7816, "Nashville, TN"),
        metrics: (73, 0.87, 4500),
        tags: &["churn", "retention", "ml-prediction"],
    },
    SeedEvent {
        title: "Credit Card Fraud Alert",
        description: "Stolen credit card detected attempting multiple purchases.",
        category: Category::Fraud,
        severity: Severity::High,
        age: Age::Hours(12),
        location: (38.5816, -121.4944, "Sacramento, CA"),
        metrics: (94, 0.96, 6200),
        tags: &["credit-card", "fraud", "blocked"],
    },
    SeedEvent {
        title: "Social Media Campaign Success",
        description: "Viral social media campaign exceeded engagement targets by 200%.",
        category: Category::Marketing,
        severity: Severity::Low,
        age: Age::Days(6),
        location: (35.2271, -80.8431, "Charlotte, NC"),
        metrics: (88, 0.90, 3800),
        tags: &["social-media", "viral", "positive"],
    },
    SeedEvent {
        title: "API Rate Limit Exceeded",
        description: "Third-party API rate limits being hit, affecting service availability.",
        category: Category::Health,
        severity: Severity::Medium,
        age: Age::Hours(8),
        location: (39.7684, -86.1581, "Indianapolis, IN"),
        metrics: (67, 0.84, 2200),
        tags: &["api", "rate-limit", "integration"],
    },
    SeedEvent {
        title: "Fire Suppression System Test",
        description: "Quarterly fire suppression system test completed successfully.",
        category: Category::Safety,
        severity: Severity::Low,
        age: Age::Days(10),
        location: (43.0389, -87.9065, "Milwaukee, WI"),
        metrics: (91, 0.95, 800),
        tags: &["fire-safety", "testing", "compliance"],
    },
    SeedEvent {
        title: "Inventory Shrinkage Detected",
        description: "Unexplained inventory discrepancies detected at retail location.",
        category: Category::Fraud,
        severity: Severity::Medium,
        age: Age::Days(3),
        location: (35.4676, -97.5164, "Oklahoma City, OK"),
        metrics: (71, 0.81, 3200),
        tags: &["inventory", "shrinkage", "investigation"],
    },
    SeedEvent {
        title: "Server Disk Space Critical",
        description: "Production server disk usage at 95%, cleanup required immediately.",
        category: Category::Ops,
        severity: Severity::High,
        age: Age::Hours(4),
        location: (36.7478, -119.7871, "Fresno, CA"),
        metrics: (91, 0.94, 5500),
        tags: &["disk-space", "storage", "urgent"],
    },
    SeedEvent {
        title: "Customer Satisfaction Score Up",
        description: "NPS score increased by 12 points compared to last quarter.",
        category: Category::Sales,
        severity: Severity::Low,
        age: Age::Days(7),
        location: (38.9072, -77.0369, "Washington, DC"),
        metrics: (87, 0.91, 2800),
        tags: &["nps", "satisfaction", "positive"],
    },
    SeedEvent {
        title: "Load Balancer Health Check",
        description: "One load balancer node failing health checks, traffic redistributed.",
        category: Category::Health,
        severity: Severity::Medium,
        age: Age::Hours(6),
        location: (33.7490, -84.3880, "Atlanta, GA"),
        metrics: (74, 0.88, 3400),
        tags: &["load-balancer", "health", "redundancy"],
    },
    SeedEvent {
        title: "Email Deliverability Issue",
        description: "Spike in email bounce rates, possible reputation issue.",
        category: Category::Marketing,
        severity: Severity::Medium,
        age: Age::Days(2),
        location: (40.7608, -111.8910, "Salt Lake City, UT"),
        metrics: (69, 0.83, 2600),
        tags: &["email", "deliverability", "reputation"],
    },
    SeedEvent {
        title: "Hazmat Compliance Audit Passed",
        description: "Annual hazardous materials compliance audit completed with zero violations.",
        category: Category::Safety,
        severity: Severity::Low,
        age: Age::Days(11),
        location: (35.0844, -106.6504, "Albuquerque, NM"),
        metrics: (95, 0.96, 1100),
        tags: &["hazmat", "compliance", "audit"],
    },
    SeedEvent {
        title: "Account Takeover Prevented",
        description: "Automated system prevented account takeover attempt using stolen credentials.",
        category: Category::Fraud,
        severity: Severity::High,
        age: Age::Hours(18),
        location: (32.7157, -117.1611, "San Diego, CA"),
        metrics: (93, 0.97, 7800),
        tags: &["account-takeover", "prevention", "security"],
    },
    SeedEvent {
        title: "Network Latency Spike",
        description: "Unusual network latency detected between data centers.",
        category: Category::Ops,
        severity: Severity::Medium,
        age: Age::Hours(10),
        location: (44.9778, -93.2650, "Minneapolis, MN"),
        metrics: (66, 0.79, 1900),
        tags: &["network", "latency", "performance"],
    },
    SeedEvent {
        title: "Lead Generation Surge",
        description: "Webinar generated 300% more qualified leads than average.",
        category: Category::Marketing,
        severity: Severity::Low,
        age: Age::Days(5),
        location: (41.2565, -95.9345, "Omaha, NE"),
        metrics: (89, 0.92, 4200),
        tags: &["leads", "webinar", "positive"],
    },
    SeedEvent {
        title: "SSL Certificate Expiring",
        description: "Production SSL certificate expires in 7 days, renewal required.",
        category: Category::Health,
        severity: Severity::High,
        age: Age::Days(1),
        location: (33.4484, -112.0740, "Phoenix, AZ"),
        metrics: (86, 0.99, 8900),
        tags: &["ssl", "certificate", "expiration"],
    },
    SeedEvent {
        title: "Quarterly Revenue Target Exceeded",
        description: "Q4 revenue exceeded target by 18%, strongest quarter of the year.",
        category: Category::Sales,
        severity: Severity::Low,
        age: Age::Days(8),
        location: (40.4406, -79.9959, "Pittsburgh, PA"),
        metrics: (97, 0.98, 15200),
        tags: &["revenue", "quarterly", "positive"],
    },
    SeedEvent {
        title: "DDoS Attack Mitigated",
        description: "Large-scale DDoS attack detected and successfully mitigated.",
        category: Category::Ops,
        severity: Severity::High,
        age: Age::Hours(14),
        location: (36.1699, -115.1398, "Las Vegas, NV"),
        metrics: (90, 0.95, 9200),
        tags: &["ddos", "security", "attack"],
    },];
