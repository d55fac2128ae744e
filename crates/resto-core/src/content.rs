//! Static marketing and training content.
//!
//! Lives here rather than in the front end so every surface (web, kiosk,
//! printed onboarding pack) shows the same plan limits and guide list.

use serde::Serialize;

/// A pricing tier on the pricing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: &'static str,
    /// `None` means unlimited.
    pub max_tables: Option<u32>,
    pub features: &'static [&'static str],
}

/// Skill level of a training video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingVideo {
    pub title: &'static str,
    /// `m:ss`.
    pub duration: &'static str,
    pub level: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guide {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Starter",
        max_tables: Some(5),
        features: &[
            "Digital QR Menu",
            "Up to 5 Tables",
            "Basic Order Management",
            "Email Support",
            "1 Admin Account",
        ],
    },
    PricingPlan {
        name: "Pro",
        max_tables: Some(20),
        features: &[
            "Everything in Starter",
            "Up to 20 Tables",
            "Kitchen Display System (KDS)",
            "Inventory Management",
            "Sales Analytics & Reports",
            "Priority Support",
            "5 Staff Accounts",
        ],
    },
    PricingPlan {
        name: "Enterprise",
        max_tables: None,
        features: &[
            "Unlimited Tables & Locations",
            "Custom Integrations (API)",
            "Dedicated Account Manager",
            "White-label Mobile App",
            "On-site Training",
            "24/7 Phone Support",
        ],
    },
];

/// Solutions page feature tiles (title, blurb).
pub const SOLUTIONS: [(&str, &str); 6] = [
    ("QR Code Ordering", "Contactless ordering right from the table. Customers scan, order, and pay instantly."),
    ("Kitchen Display System", "Replace paper tickets with digital screens. Improve communication and reduce errors."),
    ("Table Management", "Real-time view of your floor plan. Track occupancy, reservations, and turnover rates."),
    ("Analytics & Reports", "Deep insights into sales, best-selling items, and peak hours to optimize operations."),
    ("Online Payments", "Integrated UPI and Card payments. Split bills and generate digital receipts seamlessly."),
    ("Inventory Management", "Track stock levels in real-time. Get alerts when supplies are running low."),
];

pub const FAQ: [Faq; 3] = [
    Faq {
        question: "Can I upgrade my plan later?",
        answer: "Yes, you can upgrade or downgrade your plan at any time from your admin dashboard.",
    },
    Faq {
        question: "Is there a setup fee?",
        answer: "No, there are no hidden setup fees. You only pay the monthly subscription cost.",
    },
    Faq {
        question: "Do you offer hardware?",
        answer: "RestoFlow is software-only, but it works on any device with a browser (iPads, Android tablets, Laptops).",
    },
];

pub const TRAINING_VIDEOS: [TrainingVideo; 4] = [
    TrainingVideo { title: "Getting Started with RestoFlow", duration: "5:20", level: Level::Beginner },
    TrainingVideo { title: "Managing your Digital Menu", duration: "3:45", level: Level::Intermediate },
    TrainingVideo { title: "Processing Live Orders (KDS)", duration: "4:10", level: Level::Intermediate },
    TrainingVideo { title: "Analyzing Sales Reports", duration: "6:30", level: Level::Advanced },
];

pub const GUIDES: [Guide; 4] = [
    Guide { title: "Connecting Thermal Printers", description: "Setup hardware printers for KOT tickets." },
    Guide { title: "Staff Accounts & Permissions", description: "Manage waiter, kitchen, and admin access roles." },
    Guide { title: "Table QR Code Best Practices", description: "Where to place QR codes for the best scan rates." },
    Guide { title: "Refunds & Cancellations", description: "Handling customer disputes and voiding orders." },
];

/// Total running time of the training videos, in seconds.
pub fn training_runtime_secs() -> u32 {
    TRAINING_VIDEOS
        .iter()
        .filter_map(|v| {
            let (m, s) = v.duration.split_once(':')?;
            Some(m.parse::<u32>().ok()? * 60 + s.parse::<u32>().ok()?)
        })
        .sum()
}

/// Pricing tier whose table limit fits `tables`, cheapest first.
pub fn plan_for_tables(tables: u32) -> &'static PricingPlan {
    PRICING_PLANS
        .iter()
        .find(|p| p.max_tables.map_or(true, |max| tables <= max))
        .unwrap_or(&PRICING_PLANS[PRICING_PLANS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_runtime() {
        // 5:20 + 3:45 + 4:10 + 6:30
        assert_eq!(training_runtime_secs(), 320 + 225 + 250 + 390);
    }

    #[test]
    fn test_plan_for_tables() {
        assert_eq!(plan_for_tables(5).name, "Starter");
        assert_eq!(plan_for_tables(10).name, "Pro");
        assert_eq!(plan_for_tables(500).name, "Enterprise");
    }

    #[test]
    fn test_plan_features_mention_table_limits() {
        for plan in PRICING_PLANS.iter().filter(|p| p.max_tables.is_some()) {
            let limit = plan.max_tables.unwrap().to_string();
            assert!(plan.features.iter().any(|f| f.contains(&limit)), "{}", plan.name);
        }
    }
}
