mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{
    accommodation_payload, culinary_payload, destination_payload, photo_spot_payload, request,
    review_payload, test_app, transport_route_payload,
};

#[tokio::test]
async fn health_check_reports_healthy() {
    let (app, _db) = test_app().await;
    let (status, body) = request(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn create_destination_returns_created_with_children() {
    let (app, _db) = test_app().await;
    let payload = destination_payload("pantai-temajuk");

    let (status, body) = request(&app, "POST", "/api/destinations", Some(&payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "pantai-temajuk");
    assert_eq!(body["title"], "Pantai Temajuk");
    assert_eq!(body["facilities"][0]["name"], "Parking");
    assert_eq!(body["facilities"][1]["name"], "Toilets");
    assert_eq!(body["activities"][0]["name"], "Swimming");
    assert_eq!(body["tips"][0]["tip"], "Come early for the sunrise");
    assert_eq!(
        body["gallery"][0]["image_url"],
        "https://img.example.com/pantai-1.jpg"
    );
    assert!(body["created_at"].is_string());

    let (status, fetched) =
        request(&app, "GET", "/api/destinations/pantai-temajuk", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], body["title"]);
    assert_eq!(fetched["facilities"], body["facilities"]);
}

#[tokio::test]
async fn get_missing_destination_returns_not_found_detail() {
    let (app, _db) = test_app().await;
    let (status, body) = request(&app, "GET", "/api/destinations/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Destination not found");
}

#[tokio::test]
async fn duplicate_destination_id_returns_conflict() {
    let (app, _db) = test_app().await;
    let payload = destination_payload("pantai-temajuk");
    let (status, _) = request(&app, "POST", "/api/destinations", Some(&payload)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = request(&app, "POST", "/api/destinations", Some(&payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["detail"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn empty_required_field_is_rejected() {
    let (app, _db) = test_app().await;
    let mut payload = destination_payload("pantai-temajuk");
    payload["title"] = json!("");

    let (status, body) = request(&app, "POST", "/api/destinations", Some(&payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "title must not be empty");
}

#[tokio::test]
async fn overlong_field_is_rejected() {
    let (app, _db) = test_app().await;
    let mut payload = destination_payload("pantai-temajuk");
    payload["title"] = json!("x".repeat(101));

    let (status, body) = request(&app, "POST", "/api/destinations", Some(&payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "title must be at most 100 characters");
}

#[tokio::test]
async fn update_cannot_empty_a_required_field() {
    let (app, _db) = test_app().await;
    let payload = destination_payload("pantai-temajuk");
    request(&app, "POST", "/api/destinations", Some(&payload)).await;

    let patch = json!({ "title": "" });
    let (status, body) = request(
        &app,
        "PUT",
        "/api/destinations/pantai-temajuk",
        Some(&patch),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "title must not be empty");

    // the stored value is untouched
    let (_, fetched) = request(&app, "GET", "/api/destinations/pantai-temajuk", None).await;
    assert_eq!(fetched["title"], "Pantai Temajuk");
}

#[tokio::test]
async fn partial_update_leaves_absent_fields_untouched() {
    let (app, _db) = test_app().await;
    let payload = destination_payload("pantai-temajuk");
    request(&app, "POST", "/api/destinations", Some(&payload)).await;

    let patch = json!({ "price": "Rp 10.000" });
    let (status, body) = request(
        &app,
        "PUT",
        "/api/destinations/pantai-temajuk",
        Some(&patch),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], "Rp 10.000");
    assert_eq!(body["title"], "Pantai Temajuk");
    assert_eq!(body["facilities"].as_array().unwrap().len(), 2);
    assert_eq!(body["tips"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_facility_list_clears_associations() {
    let (app, _db) = test_app().await;
    let payload = destination_payload("pantai-temajuk");
    request(&app, "POST", "/api/destinations", Some(&payload)).await;

    let patch = json!({ "facilities": [] });
    let (status, body) = request(
        &app,
        "PUT",
        "/api/destinations/pantai-temajuk",
        Some(&patch),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["facilities"].as_array().unwrap().len(), 0);
    // activities were absent from the patch and must survive
    assert_eq!(body["activities"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_missing_destination_returns_not_found() {
    let (app, _db) = test_app().await;
    let patch = json!({ "price": "Free" });
    let (status, body) =
        request(&app, "PUT", "/api/destinations/nowhere", Some(&patch)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Destination not found");
}

#[tokio::test]
async fn delete_destination_returns_no_content_then_not_found() {
    let (app, _db) = test_app().await;
    let payload = destination_payload("pantai-temajuk");
    request(&app, "POST", "/api/destinations", Some(&payload)).await;

    let (status, _) = request(&app, "DELETE", "/api/destinations/pantai-temajuk", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = request(&app, "GET", "/api/destinations/pantai-temajuk", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(&app, "DELETE", "/api/destinations/pantai-temajuk", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn pagination_parameters_are_validated() {
    let (app, _db) = test_app().await;
    for uri in [
        "/api/destinations?limit=0",
        "/api/destinations?limit=101",
        "/api/destinations?skip=-1",
    ] {
        let (status, _) = request(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
    }
}

#[tokio::test]
async fn list_skip_beyond_end_returns_empty() {
    let (app, _db) = test_app().await;
    let payload = destination_payload("pantai-temajuk");
    request(&app, "POST", "/api/destinations", Some(&payload)).await;

    let (status, body) = request(&app, "GET", "/api/destinations?skip=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let (app, _db) = test_app().await;
    let payload = destination_payload("pantai-temajuk");
    request(&app, "POST", "/api/destinations", Some(&payload)).await;

    let (status, body) = request(&app, "GET", "/api/destinations?search=PANTAI", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "pantai-temajuk");
}

#[tokio::test]
async fn category_filter_composes_with_pagination() {
    let (app, _db) = test_app().await;
    for i in 0..3 {
        let mut payload = destination_payload(&format!("beach-{}", i));
        payload["category"] = json!("beach");
        request(&app, "POST", "/api/destinations", Some(&payload)).await;
    }
    let mut forest = destination_payload("forest-walk");
    forest["category"] = json!("forest");
    request(&app, "POST", "/api/destinations", Some(&forest)).await;

    let (status, body) = request(
        &app,
        "GET",
        "/api/destinations?category=beach&limit=2&skip=2",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "beach-2");
}

#[tokio::test]
async fn destination_tip_endpoints_add_and_remove() {
    let (app, _db) = test_app().await;
    let payload = destination_payload("pantai-temajuk");
    request(&app, "POST", "/api/destinations", Some(&payload)).await;

    let tip = json!({ "tip": "Watch the tide tables" });
    let (status, body) = request(
        &app,
        "POST",
        "/api/destinations/pantai-temajuk/tips",
        Some(&tip),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["tip"], "Watch the tide tables");
    let tip_id = body["id"].as_i64().unwrap();

    let uri = format!("/api/destinations/pantai-temajuk/tips/{}", tip_id);
    let (status, _) = request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Tip not found");
}

#[tokio::test]
async fn accommodation_rooms_use_type_key() {
    let (app, _db) = test_app().await;
    let payload = accommodation_payload("beach-homestay");
    let (status, body) = request(&app, "POST", "/api/accommodations", Some(&payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["rooms"][0]["type"], "Standard");
    assert_eq!(body["website"], "https://homestay.example.com");

    let room = json!({
        "type": "Family",
        "price": "Rp 250.000",
        "capacity": "4 people",
        "description": "Two double beds"
    });
    let (status, body) = request(
        &app,
        "POST",
        "/api/accommodations/beach-homestay/rooms",
        Some(&room),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["type"], "Family");
    let room_id = body["id"].as_i64().unwrap();

    let uri = format!("/api/accommodations/beach-homestay/rooms/{}", room_id);
    let (status, _) = request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, fetched) = request(&app, "GET", "/api/accommodations/beach-homestay", None).await;
    assert_eq!(fetched["rooms"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn culinary_specialty_endpoints_add_and_remove() {
    let (app, _db) = test_app().await;
    let payload = culinary_payload("warung-bu-siti");
    let (status, body) = request(&app, "POST", "/api/culinaries", Some(&payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["specialties"].as_array().unwrap().len(), 2);

    let specialty = json!({ "name": "Coconut rice" });
    let (status, body) = request(
        &app,
        "POST",
        "/api/culinaries/warung-bu-siti/specialties",
        Some(&specialty),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let specialty_id = body["id"].as_i64().unwrap();

    let uri = format!("/api/culinaries/warung-bu-siti/specialties/{}", specialty_id);
    let (status, _) = request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn photo_spot_nearby_attraction_endpoints() {
    let (app, _db) = test_app().await;
    let payload = photo_spot_payload("tanjung-datu");
    let (status, body) = request(&app, "POST", "/api/photo-spots", Some(&payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["nearby_attractions"][0]["name"], "Turtle beach");

    let attraction = json!({ "name": "Mangrove boardwalk" });
    let (status, body) = request(
        &app,
        "POST",
        "/api/photo-spots/tanjung-datu/nearby-attractions",
        Some(&attraction),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let attraction_id = body["id"].as_i64().unwrap();

    let uri = format!(
        "/api/photo-spots/tanjung-datu/nearby-attractions/{}",
        attraction_id
    );
    let (status, _) = request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Nearby attraction not found");
}

#[tokio::test]
async fn review_destination_is_free_text() {
    let (app, _db) = test_app().await;
    // no destination with this title exists; the review is still accepted
    let payload = review_payload("review-1");
    let (status, body) = request(&app, "POST", "/api/reviews", Some(&payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["destination"], "Pantai Temajuk");
    assert_eq!(body["rating"], 5);
}

#[tokio::test]
async fn reviews_filter_by_destination_exact_match() {
    let (app, _db) = test_app().await;
    let payload = review_payload("review-1");
    request(&app, "POST", "/api/reviews", Some(&payload)).await;

    let mut other = review_payload("review-2");
    other["destination"] = json!("Tanjung Datu");
    request(&app, "POST", "/api/reviews", Some(&other)).await;

    let (status, body) = request(
        &app,
        "GET",
        "/api/reviews?destination=Tanjung%20Datu",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "review-2");
}

#[tokio::test]
async fn transport_route_lifecycle_with_steps_and_tips() {
    let (app, _db) = test_app().await;
    let payload = transport_route_payload("pontianak-temajuk");
    let (status, body) = request(&app, "POST", "/api/transport-routes", Some(&payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["steps"].as_array().unwrap().len(), 2);
    assert_eq!(body["steps"][0]["vehicle"], "Bus");
    assert_eq!(body["tips"].as_array().unwrap().len(), 1);

    let step = json!({
        "step": 3,
        "description": "Walk to the homestay",
        "duration": "15 minutes",
        "cost": "Free",
        "vehicle": "On foot"
    });
    let (status, body) = request(
        &app,
        "POST",
        "/api/transport-routes/pontianak-temajuk/steps",
        Some(&step),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let step_id = body["id"].as_i64().unwrap();

    let uri = format!("/api/transport-routes/pontianak-temajuk/steps/{}", step_id);
    let (status, _) = request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = request(
        &app,
        "DELETE",
        "/api/transport-routes/pontianak-temajuk",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn transport_routes_filter_by_difficulty() {
    let (app, _db) = test_app().await;
    let payload = transport_route_payload("pontianak-temajuk");
    request(&app, "POST", "/api/transport-routes", Some(&payload)).await;

    let mut hard = transport_route_payload("jungle-crossing");
    hard["difficulty"] = json!("hard");
    request(&app, "POST", "/api/transport-routes", Some(&hard)).await;

    let (status, body) = request(
        &app,
        "GET",
        "/api/transport-routes?difficulty=hard",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "jungle-crossing");
}

#[tokio::test]
async fn child_delete_under_wrong_parent_returns_not_found() {
    let (app, _db) = test_app().await;
    request(
        &app,
        "POST",
        "/api/destinations",
        Some(&destination_payload("pantai-temajuk")),
    )
    .await;
    request(
        &app,
        "POST",
        "/api/destinations",
        Some(&destination_payload("tanjung-datu")),
    )
    .await;

    let tip = json!({ "tip": "Check the ferry schedule" });
    let (_, body) = request(
        &app,
        "POST",
        "/api/destinations/pantai-temajuk/tips",
        Some(&tip),
    )
    .await;
    let tip_id = body["id"].as_i64().unwrap();

    // the tip belongs to pantai-temajuk, not tanjung-datu
    let uri = format!("/api/destinations/tanjung-datu/tips/{}", tip_id);
    let (status, body) = request(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Tip not found");
}

#[tokio::test]
async fn child_endpoint_on_missing_parent_returns_not_found() {
    let (app, _db) = test_app().await;
    let tip = json!({ "tip": "Never trust the weather forecast" });
    let (status, body) =
        request(&app, "POST", "/api/destinations/nowhere/tips", Some(&tip)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Destination not found");
}
