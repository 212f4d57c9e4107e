//! The static training plan.
//!
//! The catalog is defined once and never mutated; every view is derived from
//! it on demand.

use std::collections::HashSet;

use crate::types::{MonthGroup, Session, Theme};

const PLAN_TITLE: &str = "Sales & Client Service Training Plan";

/// Read-only collection of completed and upcoming sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    completed: Vec<Session>,
    month_groups: Vec<MonthGroup>,
    all: Vec<Session>,
}

impl SessionStore {
    pub fn new(completed: Vec<Session>, month_groups: Vec<MonthGroup>) -> Self {
        let all = completed
            .iter()
            .chain(month_groups.iter().flat_map(|m| m.sessions.iter()))
            .cloned()
            .collect();
        Self {
            completed,
            month_groups,
            all,
        }
    }

    /// The hard-coded 2025 plan.
    pub fn builtin() -> Self {
        Self::new(completed_sessions(), upcoming_months())
    }

    pub fn plan_title(&self) -> &'static str {
        PLAN_TITLE
    }

    /// Completed sessions first, then each month group in order.
    pub fn all_sessions(&self) -> &[Session] {
        &self.all
    }

    pub fn month_groups(&self) -> &[MonthGroup] {
        &self.month_groups
    }

    pub fn completed(&self) -> &[Session] {
        &self.completed
    }

    /// Month-grouped sessions, flattened.
    pub fn upcoming(&self) -> Vec<&Session> {
        self.month_groups.iter().flat_map(|m| m.sessions.iter()).collect()
    }

    pub fn find(&self, id: &str) -> Option<&Session> {
        self.all.iter().find(|s| s.id == id)
    }

    /// Ids that occur more than once across the merged collection.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for s in &self.all {
            if !seen.insert(s.id.as_str()) && !dupes.contains(&s.id.as_str()) {
                dupes.push(s.id.as_str());
            }
        }
        dupes
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Completed sessions (January - July 2025)
// ---------------------------------------------------------------------------

fn done(id: &str, title: &str, theme: Theme, month: &str, date: &str) -> Session {
    Session::new(id, title, theme)
        .in_month(month)
        .scheduled(date)
        .completed()
}

fn completed_sessions() -> Vec<Session> {
    vec![
        done("jan-objections", "How to handle Sales Objections", Theme::Sales, "January", "2025-01-08")
            .with_trainer("Sales Lead")
            .with_format("Workshop")
            .with_icon("award")
            .with_description("Recognising the common objections raised at the front desk and answering them with confidence.")
            .with_rationale("Objection handling was the most requested skill in the 2024 team survey.")
            .with_outcomes(&["Classify objections by root cause", "Respond without discounting"])
            .with_methods(&["Scenario drills", "Peer feedback"]),
        done("jan-pricing", "Handling Pricing Objections", Theme::Sales, "January", "2025-01-15")
            .with_duration("1.5h")
            .with_trainer("Sales Lead")
            .with_format("Role-play Lab")
            .with_icon("award")
            .with_description("Anchoring on value when a client pushes back on membership price.")
            .with_rationale("Price is the single largest reason trial clients do not convert.")
            .with_outcomes(&["Explain pricing tiers clearly", "Reframe cost as value"])
            .with_methods(&["Role play", "Script review"]),
        done("jan-aaa-1", "The A-A-A Framework - 1", Theme::Communication, "January", "2025-01-22")
            .with_trainer("Communication Coach")
            .with_format("Interactive Training")
            .with_icon("message")
            .with_description("Acknowledge, Align, Assure: a three-step structure for every client conversation.")
            .with_rationale("A shared structure makes service quality consistent across studios.")
            .with_outcomes(&["Apply the A-A-A steps to inbound calls"])
            .with_methods(&["Worked examples", "Paired practice"]),
        done("feb-balance", "Balancing between Sales & Client Servicing", Theme::Retention, "February", "2025-02-05")
            .with_trainer("Customer Success Lead")
            .with_icon("heart")
            .with_description("When to sell and when to serve: keeping existing members happy while meeting targets.")
            .with_rationale("Aggressive selling to existing members was driving cancellations.")
            .with_outcomes(&["Spot service moments that are not sales moments"])
            .with_methods(&["Case studies", "Group discussion"]),
        done("feb-handovers", "Shift Handovers & Handover Process", Theme::Operations, "February", "2025-02-12")
            .with_duration("1h")
            .with_trainer("Studio Operations Manager")
            .with_format("Process Walkthrough")
            .with_icon("clock")
            .with_description("A standard checklist for passing open client issues between shifts.")
            .with_rationale("Dropped follow-ups between shifts were a recurring complaint.")
            .with_outcomes(&["Use the handover checklist on every shift change"])
            .with_methods(&["Checklist walkthrough", "Live practice"]),
        done("feb-mtp", "Sales Training with MTP", Theme::Sales, "February", "2025-02-19")
            .with_trainer("Master Trainer")
            .with_icon("award")
            .with_description("Selling the class experience from the instructor's point of view.")
            .with_rationale("Front desk staff rarely take classes and struggle to describe them.")
            .with_outcomes(&["Describe each class format in client language"])
            .with_methods(&["Class observation", "Q&A with instructors"]),
        done("mar-listening", "Active Listening - Shifa", Theme::Communication, "March", "2025-03-05")
            .with_duration("1\u{2013}2h")
            .with_trainer("Shifa")
            .with_format("Interactive Training")
            .with_icon("users")
            .with_description("Listening for the need behind the question.")
            .with_rationale("Clients reported feeling rushed during consultations.")
            .with_outcomes(&["Paraphrase client needs before responding"])
            .with_methods(&["Paired exercises", "Listening barriers workshop"]),
        done("mar-roleplay", "Role Playing", Theme::Sales, "March", "2025-03-12")
            .with_trainer("Sales Lead")
            .with_format("Role-play Lab")
            .with_icon("award")
            .with_description("Full consultation role plays from greeting to close.")
            .with_rationale("Practice in a safe setting builds confidence before real conversations.")
            .with_outcomes(&["Run a complete consultation end to end"])
            .with_methods(&["Role play", "Video review"]),
        done("mar-shark-tank", "Shark Tank - The Sales Pitch", Theme::Sales, "March", "2025-03-19")
            .with_duration("2\u{2013}3h")
            .with_trainer("Team Leaders")
            .with_format("Competition/Workshop")
            .with_icon("trending")
            .with_description("Teams pitch a membership package to a panel of managers.")
            .with_rationale("Gamified pitching surfaces the strongest scripts on the team.")
            .with_outcomes(&["Deliver a two-minute membership pitch"])
            .with_methods(&["Team competition", "Panel feedback"]),
        done("apr-pen", "Sell me this Pen", Theme::Sales, "April", "2025-04-02")
            .with_duration("1h")
            .with_trainer("Sales Lead")
            .with_format("Game")
            .with_icon("award")
            .with_description("Discovery questions before features.")
            .with_rationale("Reps were leading with features instead of needs.")
            .with_outcomes(&["Ask three discovery questions before pitching"])
            .with_methods(&["Improvised pitches"]),
        done("apr-productivity", "Productivity Hacks & Tricks", Theme::Operations, "April", "2025-04-09")
            .with_duration("1h")
            .with_trainer("Productivity Coach")
            .with_icon("clock")
            .with_description("Batching admin work and keeping the CRM current.")
            .with_rationale("Admin overhead was eating into client-facing time.")
            .with_outcomes(&["Batch follow-up calls into fixed blocks"])
            .with_methods(&["Tool training", "Task batching"]),
        done("apr-feedback-1", "Feedback System - 1", Theme::Culture, "April", "2025-04-16")
            .with_duration("1h")
            .with_trainer("Leadership Team")
            .with_format("Open Forum")
            .with_icon("star")
            .leadership()
            .with_description("Introducing the monthly two-way feedback cycle.")
            .with_rationale("Regular feedback keeps development goals visible.")
            .with_outcomes(&["Understand the feedback calendar"])
            .with_methods(&["Presentation", "Q&A"]),
        done("may-feedback-2", "Feedback System - 2", Theme::Culture, "May", "2025-05-07")
            .with_duration("1h")
            .with_trainer("Leadership Team")
            .with_format("Open Forum")
            .with_icon("star")
            .leadership()
            .with_description("Giving and receiving feedback using the SBI model.")
            .with_rationale("The first cycle showed feedback was too general to act on.")
            .with_outcomes(&["Write feedback in situation-behaviour-impact form"])
            .with_methods(&["Worked examples", "Paired practice"]),
        done("may-aaa-2", "The A-A-A Framework - 2", Theme::Communication, "May", "2025-05-14")
            .with_trainer("Communication Coach")
            .with_format("Advanced Workshop")
            .with_icon("message")
            .with_description("Applying A-A-A to written channels: email, WhatsApp and reviews.")
            .with_rationale("Written replies were less consistent than phone conversations.")
            .with_outcomes(&["Reply to a negative review using A-A-A"])
            .with_methods(&["Template review", "Live drafting"]),
        done("may-recovery", "Service Recovery", Theme::Retention, "May", "2025-05-21")
            .with_trainer("Service Recovery Specialist")
            .with_format("Scenario Training")
            .with_icon("shield")
            .with_description("Turning a cancelled class or a billing error into a loyalty moment.")
            .with_rationale("Recovered clients renew at a higher rate than clients with no issue.")
            .with_outcomes(&["Apologise, fix and follow up within 24 hours"])
            .with_methods(&["Service recovery cases", "De-escalation practice"]),
        done("jun-personas-1", "Client Personas - 1", Theme::Marketing, "June", "2025-06-04")
            .with_duration("1.5h")
            .with_trainer("Marketing Lead")
            .with_format("Interactive Workshop")
            .with_icon("target")
            .with_description("Who our members are: the five core personas.")
            .with_rationale("Tailored conversations convert better than a single script.")
            .with_outcomes(&["Name the five personas and their goals"])
            .with_methods(&["Persona cards", "Data review"]),
        done("jun-personas-2", "Client Personas - 2", Theme::Marketing, "June", "2025-06-11")
            .with_duration("1.5h")
            .with_trainer("Marketing Lead")
            .with_format("Interactive Workshop")
            .with_icon("target")
            .with_description("Matching class packages to each persona.")
            .with_rationale("Package recommendations were not persona-aware.")
            .with_outcomes(&["Recommend a package per persona"])
            .with_methods(&["Empathy mapping", "Pitch customisation"]),
        done("jun-personas-3", "Client Personas - 3", Theme::Marketing, "June", "2025-06-18")
            .with_duration("1.5h")
            .with_trainer("Marketing Lead")
            .with_format("Interactive Workshop")
            .with_icon("target")
            .with_description("Persona-led outreach for lapsed members.")
            .with_rationale("Lapsed members respond to messages that reflect their original goals.")
            .with_outcomes(&["Draft a win-back message per persona"])
            .with_methods(&["Copywriting lab"]),
        done("jul-high-ticket", "Mastering High Ticket Sales", Theme::Sales, "July", "2025-07-09")
            .with_trainer("Revenue Specialist")
            .with_icon("trending")
            .with_description("Selling annual memberships and private training bundles.")
            .with_rationale("High-ticket packages carry the best retention and margin.")
            .with_outcomes(&["Structure a high-ticket consultation"])
            .with_methods(&["Case studies", "Role play"]),
    ]
}

// ---------------------------------------------------------------------------
// Upcoming sessions (August - December 2025)
// ---------------------------------------------------------------------------

fn planned(id: &str, title: &str, theme: Theme, month: &str, date: &str) -> Session {
    Session::new(id, title, theme).in_month(month).scheduled(date)
}

fn upcoming_months() -> Vec<MonthGroup> {
    vec![
        MonthGroup::new("August", "Strength & Cycle launch readiness", vec![
            planned("aug-product", "Product Mastery \u{2013} Strength & Cycle", Theme::Product, "August", "2025-08-06")
                .with_duration("2\u{2013}3h")
                .with_trainer("Master Trainer")
                .with_icon("play")
                .with_description("Class content, unique features and pricing tiers of the new Strength & Cycle format.")
                .with_rationale("Product training is critical when launching a new offering. Thorough product knowledge improves rep confidence and customer trust.")
                .with_outcomes(&[
                    "Master class content and unique features",
                    "Confidently explain pricing tiers",
                    "Articulate value propositions effectively",
                ])
                .with_methods(&["Interactive workshop", "Feature deep-dive", "Quiz assessment", "Group exercises"])
                .with_sources(&["training.safetyculture.com", "masteroapp.com"]),
            planned("aug-sales", "Sales Pitch & Objection Workshop", Theme::Sales, "August", "2025-08-13")
                .with_format("Role-play Lab")
                .with_trainer("Sales Lead")
                .with_icon("award")
                .with_description("Scripting and rehearsing the Strength & Cycle pitch.")
                .with_rationale("Role-play significantly improves objection handling, building confidence in real sales scenarios.")
                .with_outcomes(&[
                    "Perfect Strength & Cycle sales script",
                    "Handle price and schedule objections",
                    "Build persuasive storytelling skills",
                ])
                .with_methods(&["Interactive scenarios", "Script practice", "Peer feedback", "Closing techniques"])
                .with_sources(&["showell.com"]),
            planned("aug-comm", "Communication Bootcamp", Theme::Communication, "August", "2025-08-20")
                .with_format("Interactive Training")
                .with_trainer("Communication Expert")
                .with_icon("users")
                .with_description("Active listening, clarifying questions and empathetic responses.")
                .with_rationale("Active listening makes clients feel heard and increases satisfaction.")
                .with_outcomes(&[
                    "Master active listening techniques",
                    "Ask effective clarifying questions",
                    "Practice empathetic responses",
                ])
                .with_methods(&["Paired exercises", "Group coaching", "Listening barriers workshop"])
                .with_sources(&["training.safetyculture.com"]),
            planned("aug-founder", "Founder's Vision Session", Theme::Culture, "August", "2025-08-27")
                .with_duration("1h")
                .with_format("Fireside Chat")
                .with_trainer("Mallika Parekh (Founder)")
                .with_icon("star")
                .leadership()
                .with_description("An informal conversation on company vision and brand values.")
                .with_rationale("Reinforcing core values helps reps embody the brand in every customer conversation.")
                .with_outcomes(&[
                    "Understand company vision",
                    "Connect with brand values",
                    "Motivation for Strength & Cycle launch",
                ])
                .with_methods(&["Informal discussion", "Story sharing", "Q&A session"])
                .with_sources(&["training.safetyculture.com"]),
        ]),
        MonthGroup::new("September", "Revenue growth and deeper client relationships", vec![
            planned("sep-upsell", "Upselling/Cross-selling Techniques", Theme::Sales, "September", "2025-09-03")
                .with_trainer("Revenue Specialist")
                .with_icon("trending")
                .with_description("Positioning premium services as solutions to client pain points.")
                .with_rationale("Upselling training leads to stronger customer relationships and higher sales.")
                .with_outcomes(&[
                    "Identify upselling opportunities",
                    "Position premium services as value-adds",
                    "Build stronger customer relationships",
                ])
                .with_methods(&["Case studies", "Pain point analysis", "Solution pitching exercises"])
                .with_sources(&["masteroapp.com"]),
            planned("sep-profiling", "Customer Profiling & Relationship Building", Theme::Retention, "September", "2025-09-10")
                .with_format("Interactive Workshop")
                .with_trainer("Customer Success Lead")
                .with_icon("heart")
                .with_description("Refining personas and tailoring the approach to each segment.")
                .with_rationale("Profiling helps reps prioritise high-value leads and personalise conversations.")
                .with_outcomes(&[
                    "Refine client persona understanding",
                    "Tailor approaches to different segments",
                    "Build trust through personalization",
                ])
                .with_methods(&["Persona exercises", "Empathy mapping", "Pitch customization"])
                .with_sources(&["masteroapp.com"]),
            planned("sep-comm-adv", "Effective Communication Refresher", Theme::Communication, "September", "2025-09-17")
                .with_format("Advanced Workshop")
                .with_trainer("Communication Coach")
                .with_icon("message")
                .with_description("Non-verbal cues, email etiquette and call reviews.")
                .with_rationale("Attentive communication is central to winning customer trust.")
                .with_outcomes(&[
                    "Master non-verbal communication",
                    "Improve email etiquette",
                    "Analyze and improve call performance",
                ])
                .with_methods(&["Video call analysis", "Peer feedback sessions", "Body language training"])
                .with_sources(&["showell.com"]),
            planned("sep-leadership", "Leadership Q&A", Theme::Culture, "September", "2025-09-24")
                .with_duration("1h")
                .with_format("Open Forum")
                .with_trainer("COO")
                .with_icon("star")
                .leadership()
                .with_description("An open forum on strategy and team concerns.")
                .with_rationale("Open forums reinforce transparency and show senior commitment to team development.")
                .with_outcomes(&["Clarify company strategy", "Address team concerns", "Reinforce transparency"])
                .with_methods(&["Open discussion", "Strategy Q&A", "Future planning"]),
        ]),
        MonthGroup::new("October", "Negotiation, efficiency and goal alignment", vec![
            planned("oct-negotiation", "Advanced Negotiation & Objection Handling", Theme::Sales, "October", "2025-10-01")
                .with_format("Role-play Workshop")
                .with_trainer("Negotiation Expert")
                .with_icon("award")
                .with_description("Structured bargaining that protects margins.")
                .with_rationale("Reps trained in negotiation secure better deals without sacrificing margin.")
                .with_outcomes(&[
                    "Master structured bargaining techniques",
                    "Create win-win outcomes",
                    "Handle price objections confidently",
                ])
                .with_methods(&["Simulated negotiations", "Trade-off strategies", "Win-win scenarios"])
                .with_sources(&["masteroapp.com"]),
            planned("oct-productivity", "Time Management & Productivity Hacks", Theme::Operations, "October", "2025-10-08")
                .with_trainer("Productivity Coach")
                .with_icon("clock")
                .with_description("Prioritising high-value work and cutting admin downtime.")
                .with_rationale("Time management is essential for sales team success and efficiency.")
                .with_outcomes(&[
                    "Prioritize high-value activities",
                    "Optimize CRM usage",
                    "Minimize administrative downtime",
                ])
                .with_methods(&["Tool training", "Task batching", "Productivity sharing"])
                .with_sources(&["showell.com"]),
            planned("oct-coo", "COO Strategy Workshop", Theme::Culture, "October", "2025-10-15")
                .with_duration("1\u{2013}2h")
                .with_format("Strategy Session")
                .with_trainer("COO")
                .with_icon("star")
                .leadership()
                .with_description("Aligning sales targets with company goals.")
                .with_rationale("Clear goal alignment connects individual performance to company objectives.")
                .with_outcomes(&[
                    "Align sales targets with company goals",
                    "Clarify performance expectations",
                    "Understand operational priorities",
                ])
                .with_methods(&["Metrics review", "Goal setting", "Operational Q&A"])
                .with_sources(&["showell.com"]),
        ]),
        MonthGroup::new("November", "Retention, service recovery and digital presence", vec![
            planned("nov-retention", "Customer Loyalty & Service Recovery", Theme::Retention, "November", "2025-11-05")
                .with_format("Scenario Training")
                .with_trainer("Service Recovery Specialist")
                .with_icon("shield")
                .with_description("Turning complaints into retention opportunities.")
                .with_rationale("Empathy and active listening turn negative experiences into loyalty.")
                .with_outcomes(&[
                    "Turn complaints into retention opportunities",
                    "Master de-escalation techniques",
                    "Build stronger customer loyalty",
                ])
                .with_methods(&["Service recovery cases", "De-escalation practice", "Apology language training"])
                .with_sources(&["training.safetyculture.com"]),
            planned("nov-crisis", "Crisis Management & Professional Tone", Theme::Retention, "November", "2025-11-12")
                .with_format("Scenario-based Training")
                .with_trainer("Crisis Management Expert")
                .with_icon("shield")
                .with_description("Handling facility issues while keeping a consistent brand voice.")
                .with_rationale("Tone-of-voice consistency is key to customer trust across channels.")
                .with_outcomes(&[
                    "Handle unexpected facility issues",
                    "Maintain consistent brand voice",
                    "Respond professionally across channels",
                ])
                .with_methods(&["Crisis simulations", "Multi-channel response training", "Brand voice practice"])
                .with_sources(&["training.safetyculture.com"]),
            planned("nov-digital", "Social Media & Digital Engagement", Theme::Marketing, "November", "2025-11-19")
                .with_format("Digital Training")
                .with_trainer("Digital Engagement Specialist")
                .with_icon("megaphone")
                .with_description("Answering Instagram and Facebook enquiries quickly and on-brand.")
                .with_rationale("Clients increasingly reach out through social platforms.")
                .with_outcomes(&[
                    "Manage social platform inquiries",
                    "Provide timely, branded responses",
                    "Build online community engagement",
                ])
                .with_methods(&["Platform-specific training", "Response templates", "Community building strategies"])
                .with_sources(&["training.safetyculture.com"]),
            planned("nov-referrals", "Referral & Community Events", Theme::Marketing, "November", "2025-11-26")
                .with_trainer("Marketing Lead")
                .with_icon("megaphone")
                .with_description("Running member referral drives and community classes.")
                .with_rationale("Referred members have the lowest acquisition cost and highest retention.")
                .with_outcomes(&["Plan a referral drive", "Host a community class"])
                .with_methods(&["Campaign planning", "Event checklist"]),
        ]),
        MonthGroup::new("December", "Review, celebrate and set 2026 goals", vec![
            planned("dec-review", "2025 Review & 2026 Kickoff", Theme::Culture, "December", "2025-12-03")
                .with_format("Group Session")
                .with_trainer("Leadership Team")
                .with_icon("star")
                .with_description("Celebrating achievements and setting targets for 2026.")
                .with_rationale("Celebrating success and setting new goals keeps the team engaged.")
                .with_outcomes(&["Celebrate 2025 achievements", "Learn from challenges", "Set 2026 targets and goals"])
                .with_methods(&["Achievement review", "Lessons learned session", "Goal setting for 2026"]),
            planned("dec-showcase", "Interactive Skills Showcase", Theme::Sales, "December", "2025-12-10")
                .with_format("Competition/Workshop")
                .with_trainer("Team Leaders")
                .with_icon("trending")
                .with_description("Demonstrating the year's skills in a friendly competition.")
                .with_rationale("Gamified demonstration reinforces learning while building team spirit.")
                .with_outcomes(&["Demonstrate learned skills", "Practice in low-stakes environment", "Build team camaraderie"])
                .with_methods(&["Shark Tank competition", "Role-play contests", "Peer recognition"]),
        ]),
    ]
}
