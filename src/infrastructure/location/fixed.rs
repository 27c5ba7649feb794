use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    application::services::location::LocationProvider,
    domain::models::{Coordinates, PermissionStatus},
};

/// Demo provider: the position never changes and the permission prompt
/// always resolves to the configured answer.
pub struct FixedLocationProvider {
    coordinates: Coordinates,
    answer: PermissionStatus,
    state: RwLock<PermissionState>,
}

#[derive(Default)]
struct PermissionState {
    status: Option<PermissionStatus>,
    requests: u32,
}

impl FixedLocationProvider {
    pub fn new(latitude: f64, longitude: f64, answer: PermissionStatus) -> Self {
        Self {
            coordinates: Coordinates::new(latitude, longitude),
            answer,
            state: RwLock::new(PermissionState::default()),
        }
    }

    /// How many times the permission prompt was shown.
    #[cfg(test)]
    pub async fn requests(&self) -> u32 {
        self.state.read().await.requests
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn permission_status(&self) -> PermissionStatus {
        self.state
            .read()
            .await
            .status
            .unwrap_or(PermissionStatus::NotRequested)
    }

    async fn request_permission(&self) -> anyhow::Result<PermissionStatus> {
        let mut state = self.state.write().await;
        state.requests += 1;
        state.status = Some(self.answer);
        debug!(requests = state.requests, "location permission prompt shown");
        Ok(self.answer)
    }

    async fn current(&self) -> anyhow::Result<Coordinates> {
        Ok(self.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_without_asking() {
        let provider = FixedLocationProvider::new(9.32756, -79.58518, PermissionStatus::Granted);
        assert_eq!(
            provider.permission_status().await,
            PermissionStatus::NotRequested
        );
        assert_eq!(provider.requests().await, 0);
    }

    #[tokio::test]
    async fn remembers_the_answer() {
        let provider = FixedLocationProvider::new(9.32756, -79.58518, PermissionStatus::Denied);

        let answer = provider.request_permission().await.unwrap();

        assert_eq!(answer, PermissionStatus::Denied);
        assert_eq!(provider.permission_status().await, PermissionStatus::Denied);
        assert_eq!(provider.requests().await, 1);
    }

    #[tokio::test]
    async fn coordinates_do_not_depend_on_permission() {
        let provider = FixedLocationProvider::new(9.32756, -79.58518, PermissionStatus::Denied);
        provider.request_permission().await.unwrap();

        let coordinates = provider.current().await.unwrap();

        assert_eq!(coordinates, Coordinates::new(9.32756, -79.58518));
    }
}
