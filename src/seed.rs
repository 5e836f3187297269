//! Demo datasets the portal boots with. Values mirror the production seed
//! snapshot; sentiment scores recorded on the unsigned scale are converted
//! at this boundary and zero scores become "unmeasured".

use chrono::{NaiveDate, NaiveDateTime};

use crate::sentiment::Sentiment;
use crate::stats::CallDuration;
use crate::types::{
    AbTest, AlertChannel, AlertEvent, AlertRule, AuditEntry, AuditOutcome, CallOutcome, CallRecord,
    CallStatus, Campaign, CampaignStatus, Channel, ComponentStatus, ConsentRule, ContactType,
    Customer, DncRecord, DncStatus, EmailStatus, FeedbackItem, FeedbackStatus, Priority,
    RoutingRule, ScriptPerformance, ScriptStatus, ScriptType, ScriptVersion, Segment, Severity,
    SystemComponent, TestStatus, Tone,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, s).expect("valid seed time")
}

/// A call score on the unsigned 0..1 scale; zero means no measurement.
fn scored(unsigned: f64) -> Option<Sentiment> {
    if unsigned == 0.0 {
        None
    } else {
        Some(Sentiment::from_unsigned(unsigned))
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: 1,
            name: "Fatima Rahman".into(),
            email: "fatima.r@email.com".into(),
            phone: "+88 01712-345678".into(),
            segment: Segment::Vip,
            total_purchases: 5,
            total_spent: "৳12,475".into(),
            last_purchase: date(2025, 1, 7),
            last_product: "Premium Headphones".into(),
            call_status: CallStatus::Completed,
            email_status: EmailStatus::Responded,
            sentiment: scored(0.92),
            feedback_count: 3,
        },
        Customer {
            id: 2,
            name: "Ayesha Khan".into(),
            email: "ayesha.k@email.com".into(),
            phone: "+88 01823-456789".into(),
            segment: Segment::Regular,
            total_purchases: 2,
            total_spent: "৳3,420".into(),
            last_purchase: date(2025, 1, 9),
            last_product: "Laptop Stand".into(),
            call_status: CallStatus::InProgress,
            email_status: EmailStatus::Opened,
            sentiment: scored(0.65),
            feedback_count: 1,
        },
        Customer {
            id: 3,
            name: "Nusrat Jahan".into(),
            email: "nusrat.j@email.com".into(),
            phone: "+88 01934-567890".into(),
            segment: Segment::New,
            total_purchases: 1,
            total_spent: "৳499".into(),
            last_purchase: date(2025, 1, 10),
            last_product: "Wireless Mouse".into(),
            call_status: CallStatus::Scheduled,
            email_status: EmailStatus::Sent,
            sentiment: None,
            feedback_count: 0,
        },
        Customer {
            id: 4,
            name: "Sadia Ahmed".into(),
            email: "sadia.a@email.com".into(),
            phone: "+88 01645-678901".into(),
            segment: Segment::Regular,
            total_purchases: 3,
            total_spent: "৳6,890".into(),
            last_purchase: date(2025, 1, 6),
            last_product: "USB-C Hub".into(),
            call_status: CallStatus::Failed,
            email_status: EmailStatus::Bounced,
            sentiment: None,
            feedback_count: 0,
        },
        Customer {
            id: 5,
            name: "Tasnim Hossain".into(),
            email: "tasnim.h@email.com".into(),
            phone: "+88 01756-789012".into(),
            segment: Segment::Vip,
            total_purchases: 8,
            total_spent: "৳21,342".into(),
            last_purchase: date(2025, 1, 5),
            last_product: "Desk Lamp".into(),
            call_status: CallStatus::Completed,
            email_status: EmailStatus::Responded,
            sentiment: scored(0.88),
            feedback_count: 5,
        },
    ]
}

pub fn seed_calls() -> Vec<CallRecord> {
    vec![
        CallRecord {
            id: 1,
            customer: "Fatima Rahman".into(),
            phone: "+88 01712-345678".into(),
            product: "Premium Headphones".into(),
            date: datetime(2025, 1, 10, 14, 32, 0),
            duration: CallDuration::from_secs(204),
            status: CallOutcome::Completed,
            sentiment: scored(0.92),
            outcome: "Positive feedback collected".into(),
            recording: true,
            transcript: "Full transcript available".into(),
            tags: tags(&["satisfied", "product-quality", "delivery"]),
        },
        CallRecord {
            id: 2,
            customer: "Ayesha Khan".into(),
            phone: "+88 01823-456789".into(),
            product: "Laptop Stand".into(),
            date: datetime(2025, 1, 10, 13, 18, 0),
            duration: CallDuration::from_secs(135),
            status: CallOutcome::Completed,
            sentiment: scored(0.65),
            outcome: "Mixed feedback - Assembly issues".into(),
            recording: true,
            transcript: "Full transcript available".into(),
            tags: tags(&["assembly", "instructions", "neutral"]),
        },
        CallRecord {
            id: 3,
            customer: "Nusrat Jahan".into(),
            phone: "+88 01934-567890".into(),
            product: "Wireless Mouse".into(),
            date: datetime(2025, 1, 10, 11, 45, 0),
            duration: CallDuration::from_secs(108),
            status: CallOutcome::Completed,
            sentiment: scored(0.88),
            outcome: "Positive feedback - Recommended to friends".into(),
            recording: true,
            transcript: "Full transcript available".into(),
            tags: tags(&["satisfied", "recommend", "responsive"]),
        },
        CallRecord {
            id: 4,
            customer: "Sadia Ahmed".into(),
            phone: "+88 01645-678901".into(),
            product: "USB-C Hub".into(),
            date: datetime(2025, 1, 10, 10, 22, 0),
            duration: CallDuration::zero(),
            status: CallOutcome::NoAnswer,
            sentiment: None,
            outcome: "No answer - Scheduled retry".into(),
            recording: false,
            transcript: "N/A".into(),
            tags: tags(&["retry", "no-answer"]),
        },
        CallRecord {
            id: 5,
            customer: "Tasnim Hossain".into(),
            phone: "+88 01756-789012".into(),
            product: "Desk Lamp".into(),
            date: datetime(2025, 1, 9, 16, 55, 0),
            duration: CallDuration::from_secs(252),
            status: CallOutcome::Completed,
            sentiment: scored(0.95),
            outcome: "Excellent feedback - Product exceeded expectations".into(),
            recording: true,
            transcript: "Full transcript available".into(),
            tags: tags(&["vip", "satisfied", "exceeded-expectations"]),
        },
        CallRecord {
            id: 6,
            customer: "Zara Akter".into(),
            phone: "+88 01867-890123".into(),
            product: "Monitor".into(),
            date: datetime(2025, 1, 9, 15, 30, 0),
            duration: CallDuration::zero(),
            status: CallOutcome::Failed,
            sentiment: None,
            outcome: "Call dropped - Technical issue".into(),
            recording: false,
            transcript: "Partial transcript".into(),
            tags: tags(&["technical-issue", "retry"]),
        },
    ]
}

pub fn seed_feedback() -> Vec<FeedbackItem> {
    vec![
        FeedbackItem {
            id: 1,
            date: datetime(2025, 11, 9, 14, 32, 0),
            buyer: "+88 01712-***678".into(),
            product: "Premium Package".into(),
            rating: 5,
            sentiment: Sentiment::new(0.95),
            tags: tags(&["Satisfied", "Feature Request"]),
            status: FeedbackStatus::Resolved,
            channel: Channel::Phone,
            message: Some("Love the new features, especially the dashboard improvements!".into()),
            priority: Some(Priority::Low),
        },
        FeedbackItem {
            id: 2,
            date: datetime(2025, 11, 9, 13, 18, 0),
            buyer: "+88 01823-***789".into(),
            product: "Basic Plan".into(),
            rating: 2,
            sentiment: Sentiment::new(-0.72),
            tags: tags(&["Damaged", "Urgent"]),
            status: FeedbackStatus::Escalated,
            channel: Channel::Email,
            message: Some("Product arrived damaged, need replacement urgently".into()),
            priority: Some(Priority::High),
        },
        FeedbackItem {
            id: 3,
            date: datetime(2025, 11, 9, 11, 45, 0),
            buyer: "+88 01934-***890".into(),
            product: "Standard Package".into(),
            rating: 4,
            sentiment: Sentiment::new(0.58),
            tags: tags(&["Feedback", "Positive"]),
            status: FeedbackStatus::Resolved,
            channel: Channel::Sms,
            message: Some("Good product overall, but shipping took longer than expected".into()),
            priority: Some(Priority::Medium),
        },
        FeedbackItem {
            id: 4,
            date: datetime(2025, 11, 9, 10, 15, 0),
            buyer: "+88 01645-***901".into(),
            product: "Premium Package".into(),
            rating: 4,
            sentiment: Sentiment::new(0.72),
            tags: tags(&["Satisfied", "Question"]),
            status: FeedbackStatus::Pending,
            channel: Channel::Phone,
            message: Some("Great product! Do you have any upcoming discounts?".into()),
            priority: Some(Priority::Low),
        },
        FeedbackItem {
            id: 5,
            date: datetime(2025, 11, 9, 9, 20, 0),
            buyer: "+88 01756-***012".into(),
            product: "Basic Plan".into(),
            rating: 1,
            sentiment: Sentiment::new(-0.88),
            tags: tags(&["Defect", "Urgent"]),
            status: FeedbackStatus::Escalated,
            channel: Channel::Email,
            message: Some("Product stopped working after 2 days, very disappointed".into()),
            priority: Some(Priority::High),
        },
    ]
}

pub fn seed_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: 1,
            name: "Post-Purchase Follow-up - Electronics".into(),
            status: CampaignStatus::Active,
            sent: 1247,
            opened: 834,
            clicked: 412,
            responses: 245,
            created: date(2025, 1, 5),
            last_sent: Some("2 hours ago".into()),
            scheduled_for: None,
            template: "Thank you for your purchase! We'd love to hear your thoughts...".into(),
        },
        Campaign {
            id: 2,
            name: "Delayed Feedback - Furniture".into(),
            status: CampaignStatus::Scheduled,
            sent: 0,
            opened: 0,
            clicked: 0,
            responses: 0,
            created: date(2025, 1, 8),
            last_sent: None,
            scheduled_for: Some("Tomorrow at 10:00 AM".into()),
            template: "It's been 7 days since your delivery. How is everything working out?".into(),
        },
        Campaign {
            id: 3,
            name: "VIP Customer Check-in".into(),
            status: CampaignStatus::Active,
            sent: 423,
            opened: 398,
            clicked: 267,
            responses: 198,
            created: date(2024, 12, 28),
            last_sent: Some("1 day ago".into()),
            scheduled_for: None,
            template: "As a valued customer, your feedback helps us serve you better...".into(),
        },
        Campaign {
            id: 4,
            name: "Abandoned Call Follow-up".into(),
            status: CampaignStatus::Paused,
            sent: 89,
            opened: 45,
            clicked: 12,
            responses: 8,
            created: date(2025, 1, 3),
            last_sent: Some("5 days ago".into()),
            scheduled_for: None,
            template: "We couldn't reach you. Would you prefer to share feedback via email?".into(),
        },
    ]
}

pub fn seed_consent_rules() -> Vec<ConsentRule> {
    vec![
        ConsentRule {
            id: 1,
            name: "Primary Consent Flag".into(),
            condition: "buyer.consent_flag === TRUE".into(),
            action: "ALLOW outreach".into(),
            enabled: true,
            priority: Priority::High,
            last_updated: date(2025, 11, 5),
        },
        ConsentRule {
            id: 2,
            name: "DNC List Suppression".into(),
            condition: "phone in national_dnc_registry".into(),
            action: "BLOCK all voice calls".into(),
            enabled: true,
            priority: Priority::High,
            last_updated: date(2025, 11, 9),
        },
        ConsentRule {
            id: 3,
            name: "Email Preference Check".into(),
            condition: "buyer.email_opt_in === TRUE".into(),
            action: "ALLOW email outreach".into(),
            enabled: true,
            priority: Priority::Medium,
            last_updated: date(2025, 11, 8),
        },
        ConsentRule {
            id: 4,
            name: "TCPA Compliance".into(),
            condition: "caller_id verified AND time in business_hours".into(),
            action: "ALLOW calls with disclaimer".into(),
            enabled: true,
            priority: Priority::High,
            last_updated: date(2025, 11, 7),
        },
        ConsentRule {
            id: 5,
            name: "Opt-Out Respect".into(),
            condition: "buyer.global_opt_out === TRUE".into(),
            action: "BLOCK all contact".into(),
            enabled: true,
            priority: Priority::High,
            last_updated: date(2025, 11, 9),
        },
    ]
}

pub fn seed_dnc() -> Vec<DncRecord> {
    vec![
        DncRecord {
            id: 1,
            contact: "+1-555-123-4567".into(),
            contact_type: ContactType::Phone,
            status: DncStatus::Active,
            added_date: date(2025, 11, 9),
            reason: "Customer request".into(),
        },
        DncRecord {
            id: 2,
            contact: "sohan@gmail.com".into(),
            contact_type: ContactType::Email,
            status: DncStatus::Active,
            added_date: date(2025, 11, 8),
            reason: "Unsubscribe".into(),
        },
        DncRecord {
            id: 3,
            contact: "+1-555-234-5678".into(),
            contact_type: ContactType::Phone,
            status: DncStatus::Expired,
            added_date: date(2025, 5, 12),
            reason: "TCPA complaint".into(),
        },
    ]
}

pub fn seed_alert_rules() -> Vec<AlertRule> {
    vec![
        AlertRule {
            id: 1,
            name: "Critical Error Rate".into(),
            trigger: "error_rate > 5%".into(),
            condition: "Any environment".into(),
            channel: AlertChannel::Slack,
            enabled: true,
            severity: Severity::Critical,
            last_triggered: Some(datetime(2025, 11, 9, 10, 32, 0)),
            count: 2,
        },
        AlertRule {
            id: 2,
            name: "High Latency Alert".into(),
            trigger: "p95_latency > 500ms".into(),
            condition: "Prod environment".into(),
            channel: AlertChannel::PagerDuty,
            enabled: true,
            severity: Severity::High,
            last_triggered: Some(datetime(2025, 11, 8, 14, 15, 0)),
            count: 5,
        },
        AlertRule {
            id: 3,
            name: "DNC Sync Failed".into(),
            trigger: "dnc_sync_failed".into(),
            condition: "Any sync failure".into(),
            channel: AlertChannel::Email,
            enabled: true,
            severity: Severity::Critical,
            last_triggered: None,
            count: 0,
        },
        AlertRule {
            id: 4,
            name: "Low Consent Rate".into(),
            trigger: "consent_rate < 80%".into(),
            condition: "Daily check".into(),
            channel: AlertChannel::Slack,
            enabled: true,
            severity: Severity::Medium,
            last_triggered: Some(datetime(2025, 11, 9, 8, 0, 0)),
            count: 3,
        },
        AlertRule {
            id: 5,
            name: "Script Performance Drop".into(),
            trigger: "conversion_rate dropped > 10%".into(),
            condition: "Daily comparison".into(),
            channel: AlertChannel::Email,
            enabled: false,
            severity: Severity::Medium,
            last_triggered: None,
            count: 0,
        },
    ]
}

pub fn seed_alert_history() -> Vec<AlertEvent> {
    vec![
        AlertEvent {
            id: 1,
            timestamp: datetime(2025, 11, 9, 14, 32, 15),
            alert: "Critical Error Rate".into(),
            severity: Severity::Critical,
            message: "Error rate exceeded 5% threshold - 5.2% detected".into(),
            resolved: true,
            acknowledged_by: Some("John D.".into()),
        },
        AlertEvent {
            id: 2,
            timestamp: datetime(2025, 11, 9, 13, 18, 42),
            alert: "Low Consent Rate".into(),
            severity: Severity::Medium,
            message: "Consent rate dropped to 78% - below 80% threshold".into(),
            resolved: true,
            acknowledged_by: Some("Jane S.".into()),
        },
        AlertEvent {
            id: 3,
            timestamp: datetime(2025, 11, 9, 10, 45, 30),
            alert: "High Latency Alert".into(),
            severity: Severity::High,
            message: "P95 latency reached 623ms - above 500ms threshold".into(),
            resolved: true,
            acknowledged_by: Some("Mike T.".into()),
        },
        AlertEvent {
            id: 4,
            timestamp: datetime(2025, 11, 8, 22, 15, 18),
            alert: "Critical Error Rate".into(),
            severity: Severity::Critical,
            message: "Error rate exceeded 5% threshold - 6.1% detected".into(),
            resolved: true,
            acknowledged_by: Some("Sarah L.".into()),
        },
        AlertEvent {
            id: 5,
            timestamp: datetime(2025, 11, 8, 18, 30, 5),
            alert: "High Latency Alert".into(),
            severity: Severity::High,
            message: "P95 latency reached 542ms - above 500ms threshold".into(),
            resolved: true,
            acknowledged_by: Some("Auto-resolved".into()),
        },
    ]
}

pub fn seed_audit_log() -> Vec<AuditEntry> {
    vec![
        AuditEntry {
            id: 1,
            timestamp: datetime(2025, 11, 9, 14, 32, 45),
            action: "Outreach Attempt".into(),
            contact: "+1-555-123-4567".into(),
            outcome: AuditOutcome::Blocked,
            reason: "Contact in DNC registry".into(),
            ip_address: "192.168.1.100".into(),
            user_id: "user_001".into(),
        },
        AuditEntry {
            id: 2,
            timestamp: datetime(2025, 11, 9, 14, 31, 22),
            action: "Consent Check".into(),
            contact: "jane@example.com".into(),
            outcome: AuditOutcome::Allowed,
            reason: "Consent flag verified".into(),
            ip_address: "192.168.1.101".into(),
            user_id: "user_002".into(),
        },
        AuditEntry {
            id: 3,
            timestamp: datetime(2025, 11, 9, 14, 30, 18),
            action: "Outreach Attempt".into(),
            contact: "+1-555-234-5678".into(),
            outcome: AuditOutcome::Flagged,
            reason: "TCPA compliance check required".into(),
            ip_address: "192.168.1.100".into(),
            user_id: "user_001".into(),
        },
        AuditEntry {
            id: 4,
            timestamp: datetime(2025, 11, 9, 14, 29, 5),
            action: "DNC Addition".into(),
            contact: "+1-555-345-6789".into(),
            outcome: AuditOutcome::Allowed,
            reason: "Manual addition by user".into(),
            ip_address: "192.168.1.102".into(),
            user_id: "user_003".into(),
        },
        AuditEntry {
            id: 5,
            timestamp: datetime(2025, 11, 9, 14, 28, 33),
            action: "Consent Check".into(),
            contact: "mike@example.com".into(),
            outcome: AuditOutcome::Blocked,
            reason: "Global opt-out set".into(),
            ip_address: "192.168.1.100".into(),
            user_id: "user_001".into(),
        },
    ]
}

pub fn seed_scripts() -> Vec<ScriptVersion> {
    vec![
        ScriptVersion {
            id: 1,
            version: 2.1,
            name: "Premium Voice Script".into(),
            date: date(2025, 11, 9),
            tone: Tone::Professional,
            script_type: ScriptType::Voice,
            variables: tags(&["{{first_name}}", "{{product_name}}", "{{days_since_purchase}}"]),
            content: "Hi {{first_name}}, I'm calling about your recent {{product_name}} \
                      purchase. I wanted to check in after {{days_since_purchase}} days to see \
                      how you're finding it."
                .into(),
            status: ScriptStatus::Active,
            performance: ScriptPerformance {
                attempts: 1247,
                conversions: 342,
            },
        },
        ScriptVersion {
            id: 2,
            version: 2.0,
            name: "Standard Voice Script".into(),
            date: date(2025, 11, 8),
            tone: Tone::Casual,
            script_type: ScriptType::Voice,
            variables: tags(&["{{first_name}}", "{{company}}"]),
            content: "Hey {{first_name}}, wanted to check in about {{company}} and see if now's \
                      a good time for a quick chat?"
                .into(),
            status: ScriptStatus::Testing,
            performance: ScriptPerformance {
                attempts: 890,
                conversions: 245,
            },
        },
        ScriptVersion {
            id: 3,
            version: 2.1,
            name: "Email Follow-up".into(),
            date: date(2025, 11, 9),
            tone: Tone::Professional,
            script_type: ScriptType::Email,
            variables: tags(&["{{first_name}}", "{{product_name}}"]),
            content: "Hi {{first_name}},\n\nThanks for trying {{product_name}}! We'd love to \
                      hear your thoughts.\n\nBest regards,\nOronno Team"
                .into(),
            status: ScriptStatus::Active,
            performance: ScriptPerformance {
                attempts: 3420,
                conversions: 587,
            },
        },
    ]
}

pub fn seed_routing_rules() -> Vec<RoutingRule> {
    vec![
        RoutingRule {
            id: 1,
            name: "Premium Voice Route".into(),
            condition: "Phone + Consent + High Score".into(),
            action: "Voice Call (Priority Queue)".into(),
            priority: Priority::High,
            enabled: true,
            success_rate: 78.5,
            conversions: 342,
        },
        RoutingRule {
            id: 2,
            name: "Email Fallback".into(),
            condition: "Email Only".into(),
            action: "Email Sequence (3 touches)".into(),
            priority: Priority::Medium,
            enabled: true,
            success_rate: 42.3,
            conversions: 156,
        },
        RoutingRule {
            id: 3,
            name: "A/B Channel Test".into(),
            condition: "Both Channels + New Segment".into(),
            action: "A/B Test (50/50 Split)".into(),
            priority: Priority::High,
            enabled: true,
            success_rate: 65.2,
            conversions: 289,
        },
        RoutingRule {
            id: 4,
            name: "SMS Micro-Touch".into(),
            condition: "SMS Opted-In".into(),
            action: "SMS Alert + Email".into(),
            priority: Priority::Low,
            enabled: false,
            success_rate: 31.8,
            conversions: 87,
        },
    ]
}

pub fn seed_system_components() -> Vec<SystemComponent> {
    vec![
        SystemComponent {
            name: "Kafka Message Bus".into(),
            status: ComponentStatus::Healthy,
            uptime: 99.98,
            latency_ms: 12,
            last_check: "2 seconds ago".into(),
        },
        SystemComponent {
            name: "PostgreSQL Database".into(),
            status: ComponentStatus::Healthy,
            uptime: 99.99,
            latency_ms: 8,
            last_check: "1 second ago".into(),
        },
        SystemComponent {
            name: "DNC Registry Sync".into(),
            status: ComponentStatus::Healthy,
            uptime: 99.95,
            latency_ms: 245,
            last_check: "5 minutes ago".into(),
        },
        SystemComponent {
            name: "Twilio Integration".into(),
            status: ComponentStatus::Healthy,
            uptime: 99.92,
            latency_ms: 125,
            last_check: "3 seconds ago".into(),
        },
        SystemComponent {
            name: "Email Service (SendGrid)".into(),
            status: ComponentStatus::Degraded,
            uptime: 99.5,
            latency_ms: 1200,
            last_check: "10 seconds ago".into(),
        },
        SystemComponent {
            name: "Analytics Pipeline".into(),
            status: ComponentStatus::Healthy,
            uptime: 99.96,
            latency_ms: 450,
            last_check: "15 seconds ago".into(),
        },
    ]
}

pub fn seed_ab_tests() -> Vec<AbTest> {
    vec![
        AbTest {
            id: 1,
            name: "Professional vs Casual Tone".into(),
            variant_a: "v2.1 (Professional)".into(),
            variant_b: "v2.0 (Casual)".into(),
            start_date: date(2025, 11, 5),
            status: TestStatus::Running,
            sample_size: 2500,
            conversion_a: 342,
            conversion_b: 245,
        },
        AbTest {
            id: 2,
            name: "Opening Line Test".into(),
            variant_a: "Standard Opening".into(),
            variant_b: "Question-Based Opening".into(),
            start_date: date(2025, 10, 28),
            status: TestStatus::Completed,
            sample_size: 1800,
            conversion_a: 198,
            conversion_b: 267,
        },
    ]
}
