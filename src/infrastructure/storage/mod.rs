//! Durable local persistence backed by browser localStorage.

use crate::domain::annotations::{AnnotationRepository, Trendline};
use crate::domain::logging::{LogComponent, get_logger};
use gloo_storage::{LocalStorage, Storage};

const DARK_MODE_KEY: &str = "darkMode";
const FAVORITES_KEY: &str = "favoriteCoins";
const TRENDLINES_KEY: &str = "trendlines";

/// Keyed JSON records: each read once at startup, rewritten on every
/// relevant mutation.
pub struct LocalStore;

impl LocalStore {
    pub fn load_dark_mode() -> bool {
        LocalStorage::get(DARK_MODE_KEY).unwrap_or(false)
    }

    pub fn save_dark_mode(dark: bool) {
        if let Err(e) = LocalStorage::set(DARK_MODE_KEY, dark) {
            get_logger().warn(
                LogComponent::Infrastructure("LocalStore"),
                &format!("failed to persist dark mode: {e:?}"),
            );
        }
    }

    pub fn load_favorites() -> Vec<String> {
        LocalStorage::get(FAVORITES_KEY)
            .unwrap_or_else(|_| vec!["BTC".to_string(), "ETH".to_string()])
    }

    pub fn save_favorites(favorites: &[String]) {
        if let Err(e) = LocalStorage::set(FAVORITES_KEY, favorites) {
            get_logger().warn(
                LogComponent::Infrastructure("LocalStore"),
                &format!("failed to persist favorites: {e:?}"),
            );
        }
    }

    pub fn load_trendlines() -> Vec<Trendline> {
        LocalStorage::get(TRENDLINES_KEY).unwrap_or_default()
    }

    pub fn save_trendlines(lines: &[Trendline]) {
        if let Err(e) = LocalStorage::set(TRENDLINES_KEY, lines) {
            get_logger().warn(
                LogComponent::Infrastructure("LocalStore"),
                &format!("failed to persist trendlines: {e:?}"),
            );
        }
    }
}

/// Write-through repository the `TrendlineStore` mirrors itself into.
pub struct LocalStorageRepository;

impl AnnotationRepository for LocalStorageRepository {
    fn load(&self) -> Vec<Trendline> {
        LocalStore::load_trendlines()
    }

    fn persist(&self, lines: &[Trendline]) {
        LocalStore::save_trendlines(lines);
    }
}
