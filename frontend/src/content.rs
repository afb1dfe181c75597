//! Copy and pricing for the landing pages. Pages only look things up here.

use leads::Industry;

#[derive(Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub blurb: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl PricingTier {
    /// Label the contact dialog shows when this tier's button is clicked.
    pub fn service_label(&self) -> String {
        format!("{} - {}{}", self.name, self.price, self.period)
    }
}

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct IndustryPage {
    pub slug: &'static str,
    pub industry: Industry,
    pub name: &'static str,
    pub headline: &'static str,
    pub subhead: &'static str,
    pub challenge_prompt: &'static str,
    pub tiers: &'static [PricingTier],
    pub faqs: &'static [Faq],
}

#[derive(Debug, PartialEq)]
pub struct CityPage {
    pub slug: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub blurb: &'static str,
}

impl CityPage {
    pub fn service_label(&self) -> String {
        format!("{} Marketing Consultation", self.city)
    }
}

#[derive(Debug, PartialEq)]
pub struct ServicePage {
    pub slug: &'static str,
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub deliverables: &'static [&'static str],
    pub cta_label: &'static str,
    pub tiers: &'static [PricingTier],
}

const SHARED_FAQS: &[Faq] = &[
    Faq {
        question: "Is there a long-term contract?",
        answer: "No. Plans are month to month after a 90-day ramp-up period so the campaigns have time to gather data.",
    },
    Faq {
        question: "How soon will I see results?",
        answer: "Paid search usually produces calls within the first two weeks. SEO and review growth build over three to six months.",
    },
    Faq {
        question: "Do I own my ad accounts and website?",
        answer: "Yes. Every account is created in your name and you keep full access if you ever leave.",
    },
];

pub const INDUSTRY_PAGES: &[IndustryPage] = &[
    IndustryPage {
        slug: "auto-repair",
        industry: Industry::Automotive,
        name: "Auto Repair Shops",
        headline: "Keep Your Bays Full Year Round",
        subhead: "Local search, Google Ads and review programs built for independent garages and repair shops.",
        challenge_prompt: "What's holding your shop back right now?",
        tiers: &[
            PricingTier {
                name: "Local Garage",
                price: "$1,697",
                period: "/mo",
                blurb: "For single-location shops that want more phone calls.",
                features: &["Google Business Profile management", "Local SEO for 10 service pages", "Review request automation"],
                popular: false,
            },
            PricingTier {
                name: "Multi-Bay Pro",
                price: "$2,897",
                period: "/mo",
                blurb: "For busy shops ready to add paid search.",
                features: &["Everything in Local Garage", "Google Ads management", "Call tracking and monthly reporting"],
                popular: true,
            },
        ],
        faqs: SHARED_FAQS,
    },
    IndustryPage {
        slug: "healthcare",
        industry: Industry::Healthcare,
        name: "Healthcare Practices",
        headline: "More New Patients, Less Front-Desk Chasing",
        subhead: "HIPAA-aware marketing for medical, dental and wellness practices.",
        challenge_prompt: "What's your biggest patient acquisition challenge?",
        tiers: &[
            PricingTier {
                name: "Clinic Starter",
                price: "$997",
                period: "/mo",
                blurb: "Reputation and local visibility for one location.",
                features: &["Review generation", "Local listings sync", "Monthly performance call"],
                popular: false,
            },
            PricingTier {
                name: "Practice Growth",
                price: "$2,497",
                period: "/mo",
                blurb: "Full-funnel patient acquisition.",
                features: &["Everything in Clinic Starter", "Google and Meta ads", "Landing pages per service line"],
                popular: true,
            },
        ],
        faqs: SHARED_FAQS,
    },
    IndustryPage {
        slug: "home-services",
        industry: Industry::HomeServices,
        name: "Home Service Pros",
        headline: "Book More Jobs Without Buying Shared Leads",
        subhead: "Exclusive calls for HVAC, plumbing, roofing and electrical companies.",
        challenge_prompt: "Which jobs do you want more of?",
        tiers: &[
            PricingTier {
                name: "Service Area Starter",
                price: "$1,497",
                period: "/mo",
                blurb: "Own the map pack in your core service area.",
                features: &["Local SEO", "Google Local Services Ads setup", "Review automation"],
                popular: false,
            },
            PricingTier {
                name: "Roof Pro",
                price: "$1,997",
                period: "/mo",
                blurb: "Seasonal campaigns that scale with demand.",
                features: &["Everything in Starter", "Storm and seasonal ad campaigns", "Call tracking"],
                popular: true,
            },
        ],
        faqs: SHARED_FAQS,
    },
    IndustryPage {
        slug: "restaurants",
        industry: Industry::Restaurant,
        name: "Restaurants",
        headline: "Fill Tables on Tuesday Nights",
        subhead: "Social, search and email programs that bring regulars back.",
        challenge_prompt: "What would you like guests to do more often?",
        tiers: &[
            PricingTier {
                name: "Neighborhood Favorite",
                price: "$897",
                period: "/mo",
                blurb: "Listings, reviews and a steady social presence.",
                features: &["Menu and listings sync", "Weekly social posts", "Review replies"],
                popular: true,
            },
        ],
        faqs: SHARED_FAQS,
    },
    IndustryPage {
        slug: "law-firms",
        industry: Industry::Legal,
        name: "Law Firms",
        headline: "Signed Cases, Not Just Clicks",
        subhead: "Intake-focused marketing for personal injury, family and defense firms.",
        challenge_prompt: "Which practice areas do you want to grow?",
        tiers: &[
            PricingTier {
                name: "Firm Visibility",
                price: "$2,197",
                period: "/mo",
                blurb: "Local SEO and practice-area content.",
                features: &["Practice area pages", "Legal directory management", "Monthly reporting"],
                popular: false,
            },
            PricingTier {
                name: "Case Engine",
                price: "$3,997",
                period: "/mo",
                blurb: "Paid search with intake tracking.",
                features: &["Everything in Firm Visibility", "Google Ads", "Intake call scoring"],
                popular: true,
            },
        ],
        faqs: SHARED_FAQS,
    },
];

pub const CITY_PAGES: &[CityPage] = &[
    CityPage {
        slug: "austin-tx",
        city: "Austin",
        region: "Texas",
        blurb: "Austin is crowded with agencies. We work with owner-operated businesses that want measurable calls, not vanity metrics.",
    },
    CityPage {
        slug: "denver-co",
        city: "Denver",
        region: "Colorado",
        blurb: "From Cherry Creek to Lakewood, we help Front Range businesses win the local map pack.",
    },
    CityPage {
        slug: "tampa-fl",
        city: "Tampa",
        region: "Florida",
        blurb: "Seasonal demand swings hard in Tampa Bay. Our campaigns scale spend up and down with it.",
    },
];

pub const SERVICE_PAGES: &[ServicePage] = &[
    ServicePage {
        slug: "seo",
        name: "Local SEO",
        headline: "Show Up When Customers Search Nearby",
        summary: "Technical fixes, location pages and citation cleanup that move you into the map pack.",
        deliverables: &["Technical SEO audit", "Google Business Profile optimization", "Citation cleanup", "Monthly ranking report"],
        cta_label: "Get My Free SEO Audit",
        tiers: &[PricingTier {
            name: "Local SEO",
            price: "$1,200",
            period: "/mo",
            blurb: "One location, up to 15 service pages.",
            features: &["Audit and fixes", "Content for service pages", "Link building"],
            popular: true,
        }],
    },
    ServicePage {
        slug: "ppc",
        name: "Google Ads Management",
        headline: "Paid Search That Pays for Itself",
        summary: "Tightly themed campaigns, negative keyword hygiene and call tracking on every ad.",
        deliverables: &["Campaign build or rebuild", "Call and form conversion tracking", "Weekly bid management", "Landing page testing"],
        cta_label: "Get My Free Ads Audit",
        tiers: &[PricingTier {
            name: "Ads Management",
            price: "$1,500",
            period: "/mo",
            blurb: "Up to $15k monthly ad spend.",
            features: &["Search and Performance Max", "Call tracking", "Monthly strategy call"],
            popular: true,
        }],
    },
    ServicePage {
        slug: "reputation",
        name: "Reputation Management",
        headline: "Turn Happy Customers Into Five-Star Reviews",
        summary: "Automated review requests, response templates and alerts for negative feedback.",
        deliverables: &["SMS and email review requests", "Review response drafting", "Negative review alerts"],
        cta_label: "Schedule a Consultation",
        tiers: &[],
    },
];

pub fn industry_page(slug: &str) -> Option<&'static IndustryPage> {
    INDUSTRY_PAGES.iter().find(|page| page.slug == slug)
}

pub fn city_page(slug: &str) -> Option<&'static CityPage> {
    CITY_PAGES.iter().find(|page| page.slug == slug)
}

pub fn service_page(slug: &str) -> Option<&'static ServicePage> {
    SERVICE_PAGES.iter().find(|page| page.slug == slug)
}
