//! Account operations: registration and login.

use std::sync::atomic::{AtomicU64, Ordering};

use courtside_core::PlayerId;

use crate::{Player, PlayerDirectory, PlayerDraft, PlayerError};

/// Counter for minting unique player ids.
static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Registration and authentication on top of a [`PlayerDirectory`].
///
/// This is the identity entry point for the transport layer: it turns a
/// registration draft into a stored [`Player`] and a login attempt into
/// an authenticated identity. The authenticated `Player` is then passed
/// explicitly into every mutating room operation — there is no ambient
/// session state anywhere in the core.
pub struct Accounts<D> {
    directory: D,
}

impl<D: PlayerDirectory> Accounts<D> {
    /// Creates the account service over the given directory.
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Registers a new player.
    ///
    /// # Errors
    /// - [`PlayerError::Validation`] — draft is missing required fields
    /// - [`PlayerError::EmailTaken`] — the email is already registered
    pub async fn register(&self, draft: PlayerDraft) -> Result<Player, PlayerError> {
        draft.validate()?;

        if self.directory.find_by_email(&draft.email).await?.is_some() {
            return Err(PlayerError::EmailTaken(draft.email));
        }

        let id = PlayerId(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed));
        let player = self.directory.insert(Player::register(id, draft)).await?;
        tracing::info!(player_id = %player.id, email = %player.email, "player registered");
        Ok(player)
    }

    /// Validates a login attempt and returns the authenticated player.
    ///
    /// # Errors
    /// Returns [`PlayerError::AuthenticationFailed`] for an unknown email
    /// AND for a wrong password — the two cases are indistinguishable to
    /// the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Player, PlayerError> {
        let player = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or(PlayerError::AuthenticationFailed)?;

        if !player.verify_password(password) {
            tracing::debug!(%email, "login rejected: credential mismatch");
            return Err(PlayerError::AuthenticationFailed);
        }

        tracing::info!(player_id = %player.id, %email, "player authenticated");
        Ok(player)
    }

    /// Resolves a player by email, failing loudly when absent.
    pub async fn find_by_email(&self, email: &str) -> Result<Player, PlayerError> {
        self.directory
            .find_by_email(email)
            .await?
            .ok_or_else(|| PlayerError::NotFound(email.to_owned()))
    }
}
