// src/core/utils/guards.rs
use crate::error::SiteError;
use crate::models::session::SharedSession;

/// The admin gate. Mutation entry points call this first and silently drop
/// the call on `false`; an unauthorized call is not a reportable error
/// since non-admins never see the affordances.
pub fn is_admin(session: &SharedSession) -> bool {
    session.borrow().is_logged_in()
}

/// Checks the session flag, for callers that propagate errors instead.
pub fn check_admin(session: &SharedSession) -> Result<(), SiteError> {
    if is_admin(session) {
        Ok(())
    } else {
        Err(SiteError::NotAuthorized)
    }
}
