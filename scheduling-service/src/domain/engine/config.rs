//! Frozen scheduling configuration, built once from
//! [`crate::infrastructure::config::Settings`] and threaded explicitly
//! through every engine call rather than read from a global singleton.

use shared::OfficeDays;

#[derive(Debug, Clone)]
pub struct SchedulingConfig {
    pub timezone: String,
    pub fairness_window_days: i64,
    pub atm_rest_rule_enabled: bool,
    pub atm_b_cooldown_days: i64,
    pub sysaid_week_days: OfficeDays,
    pub sysaid_required_office_days: OfficeDays,
    pub default_aggressiveness: u8,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            fairness_window_days: 90,
            atm_rest_rule_enabled: true,
            atm_b_cooldown_days: 2,
            sysaid_week_days: OfficeDays::mon_to_sat(),
            sysaid_required_office_days: OfficeDays::mon_to_fri(),
            default_aggressiveness: 1,
        }
    }
}
