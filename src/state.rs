//! Session state shared by every page, plus persisted user preferences.

use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

use crate::models::MemberType;

pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Logged-in member, decoded from the access token claims
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub member_nick: String,
    pub member_type: Option<MemberType>,
    pub member_image: Option<String>,
    pub member_phone: Option<String>,
}

impl CurrentUser {
    /// Decode the payload segment of a JWT; the signature is not verified here.
    pub fn from_token(token: &str) -> Option<Self> {
        let payload = token.split('.').nth(1)?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .ok()?;
        let user: Self = serde_json::from_slice(&bytes).ok()?;
        (!user.id.is_empty()).then_some(user)
    }

    pub fn is_admin(&self) -> bool {
        self.member_type == Some(MemberType::Admin)
    }
}

/// Preferences persisted between runs, one key each
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub locale: String,
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, Default)]
struct Session {
    user: Option<CurrentUser>,
    preferences: Preferences,
}

/// Application state store, passed explicitly to whatever needs it
#[derive(Debug, Default)]
pub struct AppState {
    session: RwLock<Session>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.read().user.clone()
    }

    pub fn set_current_user(&self, user: Option<CurrentUser>) {
        self.write().user = user;
    }

    /// Set the current user from a token, clearing it when the token is unusable
    pub fn authenticate(&self, token: Option<&str>) -> Option<CurrentUser> {
        let user = token.and_then(CurrentUser::from_token);
        self.set_current_user(user.clone());
        user
    }

    pub fn theme(&self) -> Theme {
        self.read().preferences.theme
    }

    pub fn set_theme(&self, theme: Theme) {
        self.write().preferences.theme = theme;
    }

    pub fn locale(&self) -> String {
        self.read().preferences.locale.clone()
    }

    pub fn set_locale(&self, locale: impl Into<String>) {
        self.write().preferences.locale = locale.into();
    }

    pub fn preferences(&self) -> Preferences {
        self.read().preferences.clone()
    }

    pub fn apply_preferences(&self, preferences: Preferences) {
        self.write().preferences = preferences;
    }
}

/// JSON file holding [`Preferences`]
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Stored preferences; defaults when the file is missing or unreadable
    pub async fn load(&self) -> Preferences {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) => {
                debug!("no preferences at {}: {e}", self.path.display());
                return Preferences::default();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|e| {
            warn!("ignoring malformed preferences {}: {e}", self.path.display());
            Preferences::default()
        })
    }

    pub async fn save(&self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(preferences)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    /// Load and apply to the state in one step
    pub async fn restore_into(&self, state: &AppState) {
        state.apply_preferences(self.load().await);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token(claims: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn decodes_user_from_token() {
        let token = token(json!({
            "_id": "m1",
            "memberNick": "admin",
            "memberType": "ADMIN",
            "memberImage": null,
            "iat": 1700000000
        }));

        let user = CurrentUser::from_token(&token).unwrap();
        assert_eq!(user.id, "m1");
        assert_eq!(user.member_nick, "admin");
        assert!(user.is_admin());
    }

    #[test]
    fn garbage_token_yields_no_user() {
        assert_eq!(CurrentUser::from_token("not-a-jwt"), None);
        assert_eq!(CurrentUser::from_token("a.!!!.c"), None);
        assert_eq!(CurrentUser::from_token(&token(json!({ "memberNick": "x" }))), None);
    }

    #[test]
    fn authenticate_replaces_user() {
        let state = AppState::new();
        let token = token(json!({ "_id": "m1", "memberType": "USER" }));
        state.authenticate(Some(token.as_str()));
        assert_eq!(state.current_user().unwrap().id, "m1");

        state.authenticate(None);
        assert_eq!(state.current_user(), None);
    }

    #[tokio::test]
    async fn preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("nested/preferences.json"));

        assert_eq!(store.load().await, Preferences::default());

        let preferences = Preferences {
            locale: "kr".into(),
            theme: Theme::Dark,
        };
        store.save(&preferences).await.unwrap();

        let saved: serde_json::Value = serde_json::from_str(
            &tokio::fs::read_to_string(dir.path().join("nested/preferences.json"))
                .await
                .unwrap(),
        )
        .unwrap();
        assert_eq!(saved, json!({ "locale": "kr", "theme": "dark" }));

        let state = AppState::new();
        store.restore_into(&state).await;
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.locale(), "kr");
    }

    #[tokio::test]
    async fn partial_or_broken_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let store = PreferenceStore::new(&path);

        tokio::fs::write(&path, r#"{ "theme": "dark" }"#).await.unwrap();
        let loaded = store.load().await;
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.locale, DEFAULT_LOCALE);

        tokio::fs::write(&path, "{ not json").await.unwrap();
        assert_eq!(store.load().await, Preferences::default());
    }
}
