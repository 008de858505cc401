/// Number of donors and requests shown in the dashboard activity feed.
pub const RECENT_ACTIVITY_LIMIT: i64 = 5;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Administrator role - reviews requests, manages donors and the inbox
pub const ROLE_ADMIN: &str = "admin";
