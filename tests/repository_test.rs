mod common;

use serde_json::json;

use common::{accommodation_payload, destination_payload, test_state, transport_route_payload};
use temajuk_api::schemas::{
    AccommodationCreate, DestinationCreate, DestinationUpdate, TransportRouteCreate,
};

fn destination_create(id: &str) -> DestinationCreate {
    serde_json::from_value(destination_payload(id)).expect("valid destination payload")
}

#[tokio::test]
async fn facility_names_are_deduplicated_within_create() {
    let (state, _db) = test_state().await;
    let mut payload = destination_payload("pantai-temajuk");
    payload["facilities"] = json!(["Wifi", "Wifi", "Parking"]);
    let payload: DestinationCreate = serde_json::from_value(payload).unwrap();

    let destination = state.db.create_destination(payload).await.unwrap();
    let names: Vec<&str> = destination
        .facilities
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["Wifi", "Parking"]);
}

#[tokio::test]
async fn facilities_are_shared_across_aggregates() {
    let (state, _db) = test_state().await;
    let first = state
        .db
        .create_destination(destination_create("pantai-temajuk"))
        .await
        .unwrap();
    let second = state
        .db
        .create_destination(destination_create("tanjung-datu"))
        .await
        .unwrap();
    // both payloads name "Parking"; the row is reused, not duplicated
    assert_eq!(first.facilities[0].id, second.facilities[0].id);

    let accommodation: AccommodationCreate =
        serde_json::from_value(accommodation_payload("beach-homestay")).unwrap();
    let accommodation = state.db.create_accommodation(accommodation).await.unwrap();
    let parking = accommodation
        .facilities
        .iter()
        .find(|f| f.name == "Parking")
        .expect("accommodation lists Parking");
    assert_eq!(parking.id, first.facilities[0].id);
}

#[tokio::test]
async fn lookup_rows_survive_aggregate_delete() {
    let (state, _db) = test_state().await;
    let first = state
        .db
        .create_destination(destination_create("pantai-temajuk"))
        .await
        .unwrap();
    let parking_id = first.facilities[0].id;

    assert!(state.db.delete_destination("pantai-temajuk").await.unwrap());

    let second = state
        .db
        .create_destination(destination_create("tanjung-datu"))
        .await
        .unwrap();
    assert_eq!(second.facilities[0].id, parking_id);
}

#[tokio::test]
async fn update_replaces_associations_only_when_present() {
    let (state, _db) = test_state().await;
    state
        .db
        .create_destination(destination_create("pantai-temajuk"))
        .await
        .unwrap();

    let patch = DestinationUpdate {
        facilities: Some(vec!["Camping ground".to_string()]),
        ..Default::default()
    };
    let updated = state
        .db
        .update_destination("pantai-temajuk", patch)
        .await
        .unwrap();
    assert_eq!(updated.facilities.len(), 1);
    assert_eq!(updated.facilities[0].name, "Camping ground");
    assert_eq!(updated.activities.len(), 2);

    // a patch without the list leaves the replacement in place
    let patch = DestinationUpdate {
        title: Some("Pantai Temajuk Beach".to_string()),
        ..Default::default()
    };
    let updated = state
        .db
        .update_destination("pantai-temajuk", patch)
        .await
        .unwrap();
    assert_eq!(updated.facilities.len(), 1);
}

#[tokio::test]
async fn update_bumps_updated_at_and_keeps_created_at() {
    let (state, _db) = test_state().await;
    let created = state
        .db
        .create_destination(destination_create("pantai-temajuk"))
        .await
        .unwrap();

    let patch = DestinationUpdate {
        price: Some("Rp 5.000".to_string()),
        ..Default::default()
    };
    let updated = state
        .db
        .update_destination("pantai-temajuk", patch)
        .await
        .unwrap();
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn pagination_slices_are_disjoint_and_ordered() {
    let (state, _db) = test_state().await;
    for i in 0..5 {
        state
            .db
            .create_destination(destination_create(&format!("spot-{}", i)))
            .await
            .unwrap();
    }

    let mut seen = Vec::new();
    for skip in [0, 2, 4] {
        let page = state
            .db
            .list_destinations(skip, 2, None, None)
            .await
            .unwrap();
        for destination in page {
            seen.push(destination.id);
        }
    }
    assert_eq!(seen, vec!["spot-0", "spot-1", "spot-2", "spot-3", "spot-4"]);
}

#[tokio::test]
async fn search_escapes_like_wildcards() {
    let (state, _db) = test_state().await;
    state
        .db
        .create_destination(destination_create("pantai-temajuk"))
        .await
        .unwrap();

    // a literal "%" matches nothing rather than everything
    let hits = state
        .db
        .list_destinations(0, 100, Some("%"), None)
        .await
        .unwrap();
    assert!(hits.is_empty());

    let hits = state
        .db
        .list_destinations(0, 100, Some("temajuk"), None)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn delete_transport_route_removes_children() {
    let (state, _db) = test_state().await;
    let payload: TransportRouteCreate =
        serde_json::from_value(transport_route_payload("pontianak-temajuk")).unwrap();
    let route = state.db.create_transport_route(payload).await.unwrap();
    assert_eq!(route.steps.len(), 2);

    assert!(state
        .db
        .delete_transport_route("pontianak-temajuk")
        .await
        .unwrap());

    // recreating the slug starts from a clean slate
    let mut bare = transport_route_payload("pontianak-temajuk");
    bare["steps"] = json!([]);
    bare["tips"] = json!([]);
    let bare: TransportRouteCreate = serde_json::from_value(bare).unwrap();
    let route = state.db.create_transport_route(bare).await.unwrap();
    assert!(route.steps.is_empty());
    assert!(route.tips.is_empty());
}
