//! The session manager.

use crate::SessionError;
use agora_store::{Directory, SessionRecord, SessionStore, StoreError, UserRecord, UserStore};
use agora_types::{Actor, RegNo, SiteRole, Timestamp};
use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordVerifier};
use rand::RngCore;
use std::sync::Arc;
use tracing::{info, warn};

/// Length of the raw session token in bytes (hex-encoded on the wire).
const TOKEN_BYTES: usize = 32;

/// Engine owning user registration and session tokens.
pub struct SessionManager<D> {
    directory: Arc<D>,
}

impl<D: Directory> SessionManager<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Register a new user with the default `user` role.
    pub fn register(
        &self,
        reg_no: &RegNo,
        name: &str,
        password: &str,
    ) -> Result<UserRecord, SessionError> {
        if !reg_no.is_valid() {
            return Err(SessionError::Validation(format!(
                "malformed registration number {reg_no:?}"
            )));
        }
        if name.trim().is_empty() {
            return Err(SessionError::Validation("empty display name".into()));
        }
        if password.is_empty() {
            return Err(SessionError::Validation("empty password".into()));
        }
        let d = &*self.directory;
        if d.user_store().user_exists(reg_no)? {
            return Err(SessionError::DuplicateUser(reg_no.clone()));
        }

        let user = UserRecord {
            reg_no: reg_no.clone(),
            name: name.trim().to_string(),
            password_hash: hash_password(password)?,
            role: SiteRole::User,
        };
        d.user_store().put_user(&user)?;
        info!(%reg_no, "user registered");
        Ok(user)
    }

    /// Verify credentials and issue a fresh session token.
    ///
    /// A missing user and a wrong password both fail with
    /// `InvalidCredentials` so login probes cannot distinguish them.
    pub fn login(
        &self,
        reg_no: &RegNo,
        password: &str,
        now: Timestamp,
    ) -> Result<SessionRecord, SessionError> {
        let d = &*self.directory;
        let user = match d.user_store().get_user(reg_no) {
            Ok(user) => user,
            Err(StoreError::NotFound(_)) => {
                warn!(%reg_no, "login attempt for unknown user");
                return Err(SessionError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };
        if !verify_password(password, &user.password_hash)? {
            warn!(%reg_no, "login attempt with wrong password");
            return Err(SessionError::InvalidCredentials);
        }

        let session = SessionRecord {
            token: fresh_token(),
            user: reg_no.clone(),
            issued_at: now,
        };
        d.session_store().put_session(&session)?;
        info!(%reg_no, "session issued");
        Ok(session)
    }

    /// Resolve a bearer token to the acting user. Called on every request.
    pub fn authenticate(&self, token: &str) -> Result<Actor, SessionError> {
        let d = &*self.directory;
        let session = d
            .session_store()
            .get_session(token)?
            .ok_or(SessionError::InvalidToken)?;
        // The user record is the authority on the role, not the session.
        let user = d.user_store().get_user(&session.user)?;
        Ok(Actor::new(user.reg_no, user.role))
    }

    /// Drop a session. Idempotent — an unknown token is not an error.
    pub fn logout(&self, token: &str) -> Result<bool, SessionError> {
        Ok(self.directory.session_store().remove_session(token)?)
    }
}

fn hash_password(password: &str) -> Result<String, SessionError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| SessionError::Hash(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> Result<bool, SessionError> {
    let parsed = PasswordHash::new(hash).map_err(|e| SessionError::Hash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

fn fresh_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_store_memory::MemoryStore;

    fn manager() -> SessionManager<MemoryStore> {
        SessionManager::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn register_login_authenticate_logout() {
        let sessions = manager();
        let reg = RegNo::from("REG1");
        sessions.register(&reg, "Someone", "hunter2").unwrap();

        let session = sessions.login(&reg, "hunter2", Timestamp::new(10)).unwrap();
        assert_eq!(session.token.len(), TOKEN_BYTES * 2);

        let actor = sessions.authenticate(&session.token).unwrap();
        assert_eq!(actor.reg_no, reg);
        assert_eq!(actor.role, SiteRole::User);

        assert!(sessions.logout(&session.token).unwrap());
        assert!(matches!(
            sessions.authenticate(&session.token),
            Err(SessionError::InvalidToken)
        ));
        // Logout is idempotent.
        assert!(!sessions.logout(&session.token).unwrap());
    }

    #[test]
    fn duplicate_registration_rejected() {
        let sessions = manager();
        let reg = RegNo::from("REG1");
        sessions.register(&reg, "Someone", "pw").unwrap();
        assert!(matches!(
            sessions.register(&reg, "Someone Else", "pw2"),
            Err(SessionError::DuplicateUser(_))
        ));
    }

    #[test]
    fn wrong_password_and_unknown_user_look_alike() {
        let sessions = manager();
        let reg = RegNo::from("REG1");
        sessions.register(&reg, "Someone", "right").unwrap();

        let wrong = sessions
            .login(&reg, "wrong", Timestamp::new(10))
            .unwrap_err();
        let unknown = sessions
            .login(&RegNo::from("NOPE"), "right", Timestamp::new(10))
            .unwrap_err();
        assert!(matches!(wrong, SessionError::InvalidCredentials));
        assert!(matches!(unknown, SessionError::InvalidCredentials));
    }

    #[test]
    fn malformed_registration_input_rejected() {
        let sessions = manager();
        assert!(matches!(
            sessions.register(&RegNo::from("has space"), "Name", "pw"),
            Err(SessionError::Validation(_))
        ));
        assert!(matches!(
            sessions.register(&RegNo::from("REG1"), "  ", "pw"),
            Err(SessionError::Validation(_))
        ));
        assert!(matches!(
            sessions.register(&RegNo::from("REG1"), "Name", ""),
            Err(SessionError::Validation(_))
        ));
    }

    #[test]
    fn distinct_logins_issue_distinct_tokens() {
        let sessions = manager();
        let reg = RegNo::from("REG1");
        sessions.register(&reg, "Someone", "pw").unwrap();
        let a = sessions.login(&reg, "pw", Timestamp::new(10)).unwrap();
        let b = sessions.login(&reg, "pw", Timestamp::new(20)).unwrap();
        assert_ne!(a.token, b.token);
        // Both stay valid until logged out.
        assert!(sessions.authenticate(&a.token).is_ok());
        assert!(sessions.authenticate(&b.token).is_ok());
    }
}
