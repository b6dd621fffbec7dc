//! Address lookup route handler.
//!
//! Resolves a postal code and remembers the result in the session so
//! checkout can read it back. A resolved address is the only thing checkout
//! will accept - it never takes raw address fields from the client.

use axum::{
    Json,
    extract::{Path, State},
};
use tower_sessions::Session;
use tracing::instrument;

use brasa_core::Address;

use crate::error::{AppError, Result};
use crate::models::session::keys;
use crate::state::AppState;

/// Resolve a postal code.
///
/// Returns the resolved address, or `null` for malformed codes, unknown
/// codes, and lookup failures alike.
///
/// Keystroke-triggered lookups can resolve out of order, so each lookup
/// claims a fresh token before awaiting the network and re-checks it when
/// the response arrives: if a newer lookup started in the meantime, this
/// response is stale and is discarded instead of overwriting the session.
/// The token counter lives in [`AppState`] keyed by session id - each
/// request holds its own lazily loaded copy of the session record, so a
/// counter stored in the session itself would never see a concurrent claim.
#[instrument(skip(state, session))]
pub async fn lookup(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
) -> Result<Json<Option<Address>>> {
    let session_id = match session.id() {
        Some(id) => id,
        None => {
            // A brand-new session has no id until it is first persisted.
            session.save().await?;
            session
                .id()
                .ok_or_else(|| AppError::Internal("session id missing after save".to_owned()))?
        }
    };
    let token = state.claim_lookup_token(session_id);

    let resolved = state.viacep().lookup(&code).await;

    if !state.lookup_token_is_current(session_id, token) {
        tracing::debug!("discarding stale lookup result for {code}");
        return Ok(Json(None));
    }

    match &resolved {
        Some(address) => session.insert(keys::ADDRESS, address).await?,
        None => {
            session.remove::<Address>(keys::ADDRESS).await?;
        }
    }

    Ok(Json(resolved))
}
