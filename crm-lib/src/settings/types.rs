//! Typed configuration values

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::auth::DEFAULT_LOGIN_DELAY;
use crate::directory::DEFAULT_FETCH_DELAY;
use crate::table::DEFAULT_ITEMS_PER_PAGE;

/// Table presentation defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSettings {
    pub items_per_page: usize,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Simulated latencies of the mock back end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencySettings {
    pub login: Duration,
    pub fetch: Duration,
}

impl LatencySettings {
    /// No simulated delay at all.
    pub fn none() -> Self {
        Self {
            login: Duration::ZERO,
            fetch: Duration::ZERO,
        }
    }
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            login: DEFAULT_LOGIN_DELAY,
            fetch: DEFAULT_FETCH_DELAY,
        }
    }
}

/// Runtime configuration of the front end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrmConfig {
    pub table: TableSettings,
    pub latency: LatencySettings,
}

// =============================================================================
// System settings page
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub timezone: String,
    pub date_format: String,
    pub currency: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            company_name: "Your Company Name".to_string(),
            company_email: "admin@company.com".to_string(),
            company_phone: "(555) 123-4567".to_string(),
            timezone: "America/New_York".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            currency: "USD".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub enforce_password_policy: bool,
    pub min_password_length: u32,
    pub require_mfa: bool,
    /// Minutes.
    pub session_timeout: u32,
    pub max_login_attempts: u32,
    pub ip_whitelist: String,
    pub encrypt_database: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            enforce_password_policy: true,
            min_password_length: 8,
            require_mfa: false,
            session_timeout: 30,
            max_login_attempts: 5,
            ip_whitelist: String::new(),
            encrypt_database: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSettings {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_password: String,
    pub from_email: String,
    pub from_name: String,
    pub enable_ssl: bool,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            smtp_user: String::new(),
            smtp_password: String::new(),
            from_email: String::new(),
            from_name: "CRM System".to_string(),
            enable_ssl: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub slack_integration: bool,
    pub webhook_url: String,
    pub notify_on_new_clients: bool,
    pub notify_on_assignments: bool,
    pub daily_reports: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            slack_integration: false,
            webhook_url: String::new(),
            notify_on_new_clients: true,
            notify_on_assignments: true,
            daily_reports: true,
            weekly_reports: true,
        }
    }
}

/// The four tabs of the system settings page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub general: GeneralSettings,
    pub security: SecuritySettings,
    pub email: EmailSettings,
    pub notifications: NotificationSettings,
}
