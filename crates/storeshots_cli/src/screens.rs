//! The screens shown in the listing, in presentation order

/// Content of one marketing screenshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSpec {
    /// Filesystem-safe identifier, used in the output file name
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub bullets: &'static [&'static str],
    /// Call-to-action shown in the bottom card
    pub cta: &'static str,
}

impl ScreenSpec {
    /// Output file name for this screen at 0-based position `index`
    pub fn file_name(&self, index: usize) -> String {
        format!("{:02}-{}.png", index + 1, self.slug)
    }
}

pub static SCREENS: &[ScreenSpec] = &[
    ScreenSpec {
        slug: "home-role-selection",
        title: "Choose user type",
        subtitle: "Organizer or participant at app startup.",
        bullets: &[
            "Bilingual interface (IT / EN)",
            "Legal disclaimer and privacy module",
            "Search-ready event catalog",
        ],
        cta: "Start with Events",
    },
    ScreenSpec {
        slug: "organizer-onboarding",
        title: "Organizer onboarding",
        subtitle: "Email, tax details, and payout profile.",
        bullets: &[
            "Anti-fraud risk scoring",
            "Verification status and payout control",
            "Secure profile sync with Supabase",
        ],
        cta: "Create organizer account",
    },
    ScreenSpec {
        slug: "event-creation",
        title: "Create free or paid events",
        subtitle: "Name, location, date, privacy and sponsor options.",
        bullets: &[
            "Entry fee support with 3% app commission",
            "Participant number assignment",
            "Event activation for public search",
        ],
        cta: "Publish event",
    },
    ScreenSpec {
        slug: "organizer-dashboard",
        title: "Organizer dashboard",
        subtitle: "Real-time registrations and payment states.",
        bullets: &[
            "Live list of participants",
            "Gross revenue and commission metrics",
            "CSV export for operations",
        ],
        cta: "Monitor registrations in real time",
    },
    ScreenSpec {
        slug: "participant-search",
        title: "Participant event search",
        subtitle: "Filter by name, location, and active status.",
        bullets: &[
            "Fast event discovery",
            "Free and paid event visibility",
            "Sponsor/ad placement support",
        ],
        cta: "Find the right event",
    },
    ScreenSpec {
        slug: "participant-registration",
        title: "Registration with privacy consent",
        subtitle: "Collect participant data with explicit consent flags.",
        bullets: &[
            "Privacy and retention consent fields",
            "Automatic registration code generation",
            "Confirmation flow with email webhook",
        ],
        cta: "Complete registration",
    },
    ScreenSpec {
        slug: "payment-flow",
        title: "Paid registration flow",
        subtitle: "Pending session, payment confirmation, webhook sync.",
        bullets: &[
            "Stripe-ready webhook architecture",
            "Payment status lifecycle management",
            "Organizer list updated after payment",
        ],
        cta: "Confirm payment securely",
    },
    ScreenSpec {
        slug: "sponsor-module",
        title: "Paid sponsor slots",
        subtitle: "Create sponsor packages and generate Stripe links.",
        bullets: &[
            "Daily or multi-day sponsor packages",
            "Contracts stored in Supabase (IT/EN)",
            "Banner shown only when active and not expired",
        ],
        cta: "Generate sponsor checkout link",
    },
];
