//! In-Memory Session Manager Implementation

use chrono::{Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{Session, SessionError, SessionManagerPort};

/// 会话有效期上限（100 年），超出部分截断
pub const MAX_EXPIRE_SECS: u64 = 100 * 365 * 24 * 60 * 60;

/// 内存会话管理器
///
/// 会话在 `expire_secs` 秒无活动后失效
pub struct InMemorySessionManager {
    sessions: DashMap<String, Session>,
    expire_after: Duration,
}

impl InMemorySessionManager {
    pub fn new(expire_secs: u64) -> Self {
        Self {
            sessions: DashMap::new(),
            expire_after: Duration::seconds(expire_secs.min(MAX_EXPIRE_SECS) as i64),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn is_expired(&self, session: &Session) -> bool {
        Utc::now() - session.last_activity > self.expire_after
    }
}

impl SessionManagerPort for InMemorySessionManager {
    fn create(&self, user_id: i64, username: &str) -> String {
        let session = Session::new(user_id, username);
        let token = session.token.clone();
        self.sessions.insert(token.clone(), session);
        tracing::info!(user_id = user_id, username = %username, "Session created");
        token
    }

    fn get(&self, token: &str) -> Result<Session, SessionError> {
        let mut session = self
            .sessions
            .get_mut(token)
            .ok_or_else(|| SessionError::NotFound(token.to_string()))?;

        if self.is_expired(&session) {
            // 先释放写锁再删除
            drop(session);
            self.sessions.remove(token);
            tracing::debug!(user_token = %token, "Session expired");
            return Err(SessionError::Expired(token.to_string()));
        }

        session.last_activity = Utc::now();
        Ok(session.clone())
    }

    fn close(&self, token: &str) -> Result<(), SessionError> {
        self.sessions
            .remove(token)
            .map(|(_, session)| {
                tracing::info!(user_id = session.user_id, "Session closed");
            })
            .ok_or_else(|| SessionError::NotFound(token.to_string()))
    }

    fn purge_expired(&self) -> usize {
        let before = self.sessions.len();
        let now = Utc::now();
        self.sessions
            .retain(|_, session| now - session.last_activity <= self.expire_after);
        let purged = before.saturating_sub(self.sessions.len());

        if purged > 0 {
            tracing::info!(purged = purged, "Expired sessions purged");
        }
        purged
    }

    fn count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huge_expire_is_clamped() {
        let manager = InMemorySessionManager::new(u64::MAX);
        assert_eq!(manager.expire_after, Duration::seconds(MAX_EXPIRE_SECS as i64));

        let token = manager.create(1, "long");
        assert!(manager.get(&token).is_ok());
        assert_eq!(manager.purge_expired(), 0);
    }

    #[test]
    fn test_session_lifecycle() {
        let manager = InMemorySessionManager::new(3600);

        // Create
        let token = manager.create(7, "aru");
        assert_eq!(manager.count(), 1);

        // Get
        let session = manager.get(&token).unwrap();
        assert_eq!(session.user_id, 7);
        assert_eq!(session.username, "aru");

        // Close
        assert!(manager.close(&token).is_ok());
        assert!(matches!(manager.get(&token), Err(SessionError::NotFound(_))));
        assert!(manager.close(&token).is_err());
    }

    #[test]
    fn test_tokens_are_unique() {
        let manager = InMemorySessionManager::new(3600);
        let a = manager.create(1, "a");
        let b = manager.create(1, "a");
        assert_ne!(a, b);
        assert_eq!(manager.count(), 2);
    }

    #[test]
    fn test_expired_session_removed_on_get() {
        let manager = InMemorySessionManager::new(60);
        let token = manager.create(1, "a");

        if let Some(mut session) = manager.sessions.get_mut(&token) {
            session.last_activity = Utc::now() - Duration::seconds(120);
        }

        assert!(matches!(manager.get(&token), Err(SessionError::Expired(_))));
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_purge_expired() {
        let manager = InMemorySessionManager::new(60);
        let stale = manager.create(1, "a");
        let fresh = manager.create(2, "b");

        if let Some(mut session) = manager.sessions.get_mut(&stale) {
            session.last_activity = Utc::now() - Duration::seconds(120);
        }

        assert_eq!(manager.purge_expired(), 1);
        assert!(manager.get(&fresh).is_ok());
        assert_eq!(manager.purge_expired(), 0);
    }
}
