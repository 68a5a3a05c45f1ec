use crate::grid::Segment;

/// Suggested next steps for an associate focusing on `segment`
pub fn recommendations(segment: Segment) -> &'static [&'static str] {
    match segment {
        Segment::Hdb => &[
            "Farm one or two HDB estates consistently with door-knocking and flyers",
            "Track resale flat transactions and HDB eligibility rules closely",
            "Build a panel of bankers and conveyancers for upgrader cases",
        ],
        Segment::PrivateResale => &[
            "Hold regular condo roadshows and open houses in a chosen district",
            "Keep a transaction log of recent resale prices per development",
            "Follow up on HDB upgraders ready for private property",
        ],
        Segment::Landed => &[
            "Specialise in a few landed estates and learn their tenure and zoning",
            "Network with owners through estate events and direct mail",
            "Partner with senior landed specialists for co-broking",
        ],
        Segment::NewLaunch => &[
            "Register with developer project teams early for each launch",
            "Master site plans, pricing and payment schemes before preview day",
            "Build a buyer database of upgraders and investors",
        ],
        Segment::TopProjects => &[
            "Join the agency's top project teams and attend every briefing",
            "Prepare comparison sheets against competing launches nearby",
            "Run targeted social campaigns for showflat appointments",
        ],
        Segment::Referral => &[
            "Stay in touch with past clients through regular check-ins",
            "Ask for introductions after every closed deal",
            "Set up a referral programme with friends and business contacts",
        ],
        Segment::IndusComm => &[
            "Learn industrial and commercial zoning, leases and plot ratios",
            "Canvass business owners in industrial parks and shophouses",
            "Work with valuers and business brokers on en-bloc and leasing deals",
        ],
        Segment::SocialMedia => &[
            "Post consistent listing and market update content every week",
            "Use short-form video walkthroughs to generate enquiries",
            "Run paid campaigns with tight audience targeting and track leads",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_segment_has_recommendations() {
        for segment in Segment::iter() {
            assert!(!recommendations(segment).is_empty(), "{segment}");
        }
    }
}
