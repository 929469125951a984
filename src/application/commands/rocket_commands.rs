// src/application/commands/rocket_commands.rs
//
// Rocket Command Handlers
//
// RULES:
// - Accept DTOs
// - Call the rocket repository
// - Return DTOs
// - Never contain business logic

use chrono::NaiveDate;

use crate::application::{dto::*, state::AppState};
use crate::domain::Rocket;
use crate::error::AppResult;

/// Fetch the catalogue and list remote rockets followed by custom ones
pub async fn list_rockets(state: &AppState) -> AppResult<Vec<RocketDto>> {
    state.rocket_repository.fetch_all().await?;

    Ok(state
        .rocket_repository
        .all_records()
        .into_iter()
        .map(RocketDto::from)
        .collect())
}

/// Select a single rocket, custom rockets first
pub async fn get_rocket(rocket_id: &str, state: &AppState) -> AppResult<RocketDto> {
    state.rocket_repository.load_local()?;

    let rocket = state.rocket_repository.fetch_one(rocket_id).await?;
    Ok(RocketDto::from(rocket))
}

/// Create and persist a user-authored rocket
pub fn create_rocket(dto: CreateRocketDto, state: &AppState) -> AppResult<RocketDto> {
    let first_flight = NaiveDate::parse_from_str(dto.first_flight.trim(), "%Y-%m-%d")?;

    let rocket = Rocket::new_custom(
        dto.name,
        dto.description,
        dto.flickr_images,
        dto.cost_per_launch,
        dto.country,
        first_flight,
    );

    // Storage is rewritten wholesale on add, so pick up earlier entries first
    state.rocket_repository.load_local()?;
    state.rocket_repository.add_local(rocket.clone())?;

    Ok(RocketDto::from(rocket))
}

pub fn repository_status(state: &AppState) -> RepositoryStatusDto {
    let snapshot = state.rocket_repository.snapshot();

    RepositoryStatusDto {
        loading: snapshot.loading,
        error: snapshot.error,
        remote_count: snapshot.remote.len(),
        local_count: snapshot.local.len(),
        current_selection: snapshot.current_selection.map(RocketDto::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::integrations::MockRocketApi;
    use crate::repositories::StoredCustomRocketRepository;
    use crate::services::RocketRepository;
    use crate::storage::MemoryKeyValueStore;
    use std::sync::Arc;

    fn state_with(api: MockRocketApi) -> AppState {
        let store = Arc::new(MemoryKeyValueStore::new());
        let custom = Arc::new(StoredCustomRocketRepository::new(store));

        AppState {
            rocket_repository: Arc::new(RocketRepository::new(Arc::new(api), custom)),
        }
    }

    fn create_dto(name: &str) -> CreateRocketDto {
        CreateRocketDto {
            name: name.to_string(),
            description: "Built in a garage".to_string(),
            flickr_images: vec![],
            cost_per_launch: 250_000,
            country: "Portugal".to_string(),
            first_flight: "2025-07-14".to_string(),
        }
    }

    #[test]
    fn test_create_rocket_formats_date_and_persists() {
        let state = state_with(MockRocketApi::new());

        let created = create_rocket(create_dto("Garage One"), &state).unwrap();

        assert_eq!(created.first_flight, "2025-07-14");
        assert_eq!(state.rocket_repository.local_records()[0].id, created.id);
    }

    #[test]
    fn test_create_rocket_rejects_bad_date() {
        let state = state_with(MockRocketApi::new());
        let mut dto = create_dto("Garage One");
        dto.first_flight = "14/07/2025".to_string();

        let err = create_rocket(dto, &state).unwrap_err();
        assert!(matches!(err, AppError::ParseFailed(_)));
        assert!(state.rocket_repository.local_records().is_empty());
    }

    #[tokio::test]
    async fn test_get_rocket_finds_created_rocket_without_network() {
        let mut api = MockRocketApi::new();
        api.expect_get_rocket().never();
        let state = state_with(api);

        let created = create_rocket(create_dto("Garage One"), &state).unwrap();
        let fetched = get_rocket(&created.id, &state).await.unwrap();

        assert_eq!(fetched.name, "Garage One");
        let status = repository_status(&state);
        assert_eq!(status.current_selection.map(|r| r.id), Some(created.id));
        assert!(!status.loading);
    }

    #[tokio::test]
    async fn test_list_rockets_appends_custom_after_remote() {
        let mut api = MockRocketApi::new();
        api.expect_list_rockets().returning(|| {
            Ok(vec![Rocket {
                id: "falcon9".to_string(),
                name: "Falcon 9".to_string(),
                description: String::new(),
                flickr_images: vec![],
                cost_per_launch: 50_000_000,
                country: "United States".to_string(),
                first_flight: NaiveDate::from_ymd_opt(2010, 6, 4).unwrap(),
            }])
        });
        let state = state_with(api);
        create_rocket(create_dto("Garage One"), &state).unwrap();

        let listed = list_rockets(&state).await.unwrap();

        let names: Vec<&str> = listed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Falcon 9", "Garage One"]);
        assert_eq!(repository_status(&state).remote_count, 1);
    }
}
