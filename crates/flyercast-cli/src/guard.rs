//! Declarative role gates evaluated from the stored session.
//!
//! The dashboard's route guards (`/admin` vs `/company`) become two
//! checks applied once per command, instead of ad hoc role tests inside
//! every handler.

use flyercast_core::types::CompanyId;
use flyercast_core::{AppError, AppResult};
use flyercast_entity::session::{Role, Session};

/// Gate a command to administrators.
pub fn require_admin(session: &Session) -> AppResult<()> {
    if session.role.is_admin() {
        Ok(())
    } else {
        Err(AppError::authorization(
            "This command requires the Admin role",
        ))
    }
}

/// Resolve the company a command acts on.
///
/// Admins must name a company explicitly; company sessions default to
/// their own and may not name another.
pub fn resolve_company(session: &Session, explicit: Option<CompanyId>) -> AppResult<CompanyId> {
    match session.role {
        Role::Admin => explicit.ok_or_else(|| {
            AppError::validation("Specify --company when running this command as Admin")
        }),
        Role::Company => {
            let own = session.company_id.ok_or_else(|| {
                AppError::authentication("Session has no company scope; sign in again")
            })?;
            match explicit {
                None => Ok(own),
                Some(id) if id == own => Ok(own),
                Some(_) => Err(AppError::authorization(
                    "Company accounts can only act on their own company",
                )),
            }
        }
    }
}

/// Like [`resolve_company`], but admins may leave the company unset
/// (meaning "all companies").
pub fn resolve_company_filter(
    session: &Session,
    explicit: Option<CompanyId>,
) -> AppResult<Option<CompanyId>> {
    match session.role {
        Role::Admin => Ok(explicit),
        Role::Company => resolve_company(session, explicit).map(Some),
    }
}
