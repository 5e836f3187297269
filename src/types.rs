//! Domain record types for the portal datasets.
//!
//! Every record serializes as camelCase JSON (the portal's wire shape).
//! Status unions are tagged enums with exhaustive display/accent mappings —
//! no stringly-typed `switch` fallthroughs.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::roster::Record;
use crate::sentiment::Sentiment;
use crate::stats::{rate, CallDuration};

/// Badge tint used by status displays. Replaces the source pages' inline
/// color-class switches with one typed mapping per enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
    Purple,
    Gray,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Green => "green",
            Accent::Blue => "blue",
            Accent::Yellow => "yellow",
            Accent::Orange => "orange",
            Accent::Red => "red",
            Accent::Purple => "purple",
            Accent::Gray => "gray",
        }
    }
}

// =============================================================================
// Customers
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    #[serde(rename = "VIP")]
    Vip,
    Regular,
    New,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Vip => "VIP",
            Segment::Regular => "Regular",
            Segment::New => "New",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            Segment::Vip => Accent::Purple,
            Segment::Regular => Accent::Blue,
            Segment::New => Accent::Green,
        }
    }
}

/// Outreach call state shown on the customer directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    Completed,
    InProgress,
    Scheduled,
    Failed,
}

impl CallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallStatus::Completed => "completed",
            CallStatus::InProgress => "in-progress",
            CallStatus::Scheduled => "scheduled",
            CallStatus::Failed => "failed",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            CallStatus::Completed => Accent::Green,
            CallStatus::InProgress => Accent::Blue,
            CallStatus::Scheduled => Accent::Yellow,
            CallStatus::Failed => Accent::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    Responded,
    Opened,
    Sent,
    Bounced,
}

impl EmailStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailStatus::Responded => "responded",
            EmailStatus::Opened => "opened",
            EmailStatus::Sent => "sent",
            EmailStatus::Bounced => "bounced",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            EmailStatus::Responded => Accent::Green,
            EmailStatus::Opened => Accent::Blue,
            EmailStatus::Sent => Accent::Yellow,
            EmailStatus::Bounced => Accent::Red,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub segment: Segment,
    pub total_purchases: u32,
    /// Formatted currency string as rendered, e.g. "৳12,475".
    pub total_spent: String,
    pub last_purchase: NaiveDate,
    pub last_product: String,
    pub call_status: CallStatus,
    pub email_status: EmailStatus,
    /// `None` until a completed conversation produces a score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    pub feedback_count: u32,
}

// =============================================================================
// Call history
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallOutcome {
    Completed,
    NoAnswer,
    Failed,
}

impl CallOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallOutcome::Completed => "completed",
            CallOutcome::NoAnswer => "no-answer",
            CallOutcome::Failed => "failed",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            CallOutcome::Completed => Accent::Green,
            CallOutcome::NoAnswer => Accent::Yellow,
            CallOutcome::Failed => Accent::Red,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    pub id: u64,
    pub customer: String,
    pub phone: String,
    pub product: String,
    pub date: NaiveDateTime,
    /// Invariant: zero iff status != Completed.
    pub duration: CallDuration,
    pub status: CallOutcome,
    /// Invariant: `None` iff status != Completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    pub outcome: String,
    pub recording: bool,
    pub transcript: String,
    pub tags: Vec<String>,
}

// =============================================================================
// Feedback inbox
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackStatus {
    Resolved,
    Escalated,
    Pending,
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::Resolved => "Resolved",
            FeedbackStatus::Escalated => "Escalated",
            FeedbackStatus::Pending => "Pending",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            FeedbackStatus::Resolved => Accent::Green,
            FeedbackStatus::Escalated => Accent::Red,
            FeedbackStatus::Pending => Accent::Yellow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Phone,
    Email,
    #[serde(rename = "SMS")]
    Sms,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Phone => "Phone",
            Channel::Email => "Email",
            Channel::Sms => "SMS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            Priority::High => Accent::Red,
            Priority::Medium => Accent::Yellow,
            Priority::Low => Accent::Gray,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub id: u64,
    pub date: NaiveDateTime,
    pub buyer: String,
    pub product: String,
    /// Star rating 1..=5.
    pub rating: u8,
    pub sentiment: Sentiment,
    pub tags: Vec<String>,
    pub status: FeedbackStatus,
    pub channel: Channel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

// =============================================================================
// Email campaigns
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Scheduled,
    Paused,
    Draft,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Scheduled => "scheduled",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Draft => "draft",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            CampaignStatus::Active => Accent::Green,
            CampaignStatus::Scheduled => Accent::Blue,
            CampaignStatus::Paused => Accent::Yellow,
            CampaignStatus::Draft => Accent::Gray,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: u64,
    pub name: String,
    pub status: CampaignStatus,
    pub sent: u32,
    pub opened: u32,
    pub clicked: u32,
    pub responses: u32,
    pub created: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
    pub template: String,
}

impl Campaign {
    pub fn open_rate(&self) -> f64 {
        rate(self.opened, self.sent)
    }

    pub fn click_rate(&self) -> f64 {
        rate(self.clicked, self.sent)
    }

    pub fn response_rate(&self) -> f64 {
        rate(self.responses, self.sent)
    }
}

// =============================================================================
// Consent & compliance
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRule {
    pub id: u64,
    pub name: String,
    pub condition: String,
    pub action: String,
    pub enabled: bool,
    pub priority: Priority,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Phone,
    Email,
}

impl ContactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Phone => "phone",
            ContactType::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DncStatus {
    Active,
    Expired,
}

impl DncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DncStatus::Active => "active",
            DncStatus::Expired => "expired",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DncRecord {
    pub id: u64,
    pub contact: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub status: DncStatus,
    pub added_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOutcome {
    Blocked,
    Allowed,
    Flagged,
}

impl AuditOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditOutcome::Blocked => "blocked",
            AuditOutcome::Allowed => "allowed",
            AuditOutcome::Flagged => "flagged",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            AuditOutcome::Blocked => Accent::Red,
            AuditOutcome::Allowed => Accent::Green,
            AuditOutcome::Flagged => Accent::Yellow,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: u64,
    pub timestamp: NaiveDateTime,
    pub action: String,
    pub contact: String,
    pub outcome: AuditOutcome,
    pub reason: String,
    pub ip_address: String,
    pub user_id: String,
}

// =============================================================================
// Alerts
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertChannel {
    Slack,
    Email,
    PagerDuty,
    #[serde(rename = "SMS")]
    Sms,
}

impl AlertChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertChannel::Slack => "Slack",
            AlertChannel::Email => "Email",
            AlertChannel::PagerDuty => "PagerDuty",
            AlertChannel::Sms => "SMS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            Severity::Critical => Accent::Red,
            Severity::High => Accent::Orange,
            Severity::Medium => Accent::Yellow,
            Severity::Low => Accent::Blue,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRule {
    pub id: u64,
    pub name: String,
    pub trigger: String,
    pub condition: String,
    pub channel: AlertChannel,
    pub enabled: bool,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_triggered: Option<NaiveDateTime>,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEvent {
    pub id: u64,
    pub timestamp: NaiveDateTime,
    pub alert: String,
    pub severity: Severity,
    pub message: String,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledged_by: Option<String>,
}

// =============================================================================
// Scripts & A/B tests
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptStatus {
    Active,
    Testing,
    Archived,
}

impl ScriptStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptStatus::Active => "Active",
            ScriptStatus::Testing => "Testing",
            ScriptStatus::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    Voice,
    Email,
    Sms,
}

impl ScriptType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptType::Voice => "voice",
            ScriptType::Email => "email",
            ScriptType::Sms => "sms",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Professional,
    Casual,
    Enthusiastic,
    Empathetic,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Enthusiastic => "Enthusiastic",
            Tone::Empathetic => "Empathetic",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptPerformance {
    pub attempts: u32,
    pub conversions: u32,
}

impl ScriptPerformance {
    pub fn conversion_rate(&self) -> f64 {
        rate(self.conversions, self.attempts)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptVersion {
    pub id: u64,
    /// Numeric version, displayed as `v{major.minor}` (e.g. `v2.1`).
    pub version: f64,
    pub name: String,
    pub date: NaiveDate,
    pub tone: Tone,
    #[serde(rename = "type")]
    pub script_type: ScriptType,
    pub variables: Vec<String>,
    pub content: String,
    pub status: ScriptStatus,
    pub performance: ScriptPerformance,
}

impl ScriptVersion {
    pub fn version_label(&self) -> String {
        format!("v{:.1}", self.version)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    Running,
    Completed,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Running => "Running",
            TestStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbTest {
    pub id: u64,
    pub name: String,
    pub variant_a: String,
    pub variant_b: String,
    pub start_date: NaiveDate,
    pub status: TestStatus,
    pub sample_size: u32,
    pub conversion_a: u32,
    pub conversion_b: u32,
}

// =============================================================================
// Orchestrator
// =============================================================================

/// Channel-routing rule evaluated by the outreach orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRule {
    pub id: u64,
    pub name: String,
    pub condition: String,
    pub action: String,
    pub priority: Priority,
    pub enabled: bool,
    /// Historical success rate, already in percent.
    pub success_rate: f64,
    pub conversions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Down,
}

impl ComponentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentStatus::Healthy => "healthy",
            ComponentStatus::Degraded => "degraded",
            ComponentStatus::Down => "down",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            ComponentStatus::Healthy => Accent::Green,
            ComponentStatus::Degraded => Accent::Yellow,
            ComponentStatus::Down => Accent::Red,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemComponent {
    pub name: String,
    pub status: ComponentStatus,
    /// Uptime percentage, e.g. 99.98.
    pub uptime: f64,
    pub latency_ms: u32,
    pub last_check: String,
}

// =============================================================================
// Record identity
// =============================================================================

impl Record for Customer {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for CallRecord {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for FeedbackItem {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Campaign {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for ConsentRule {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for DncRecord {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for AuditEntry {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for AlertRule {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for AlertEvent {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for ScriptVersion {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for AbTest {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for RoutingRule {
    fn id(&self) -> u64 {
        self.id
    }
}
