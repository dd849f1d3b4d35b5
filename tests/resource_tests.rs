//! Integration tests for resource operations.
//!
//! These tests verify how each operation maps to an HTTP call: list query
//! shaping, scope injection on create, sparse update bodies, expected
//! status codes and error normalization.

use std::time::Duration;

use serde_json::json;
use tactill::rest::resources::{
    Article, ArticleCreation, ArticleModification, ArticleMovement, CatalogOption,
    CatalogOptionCreation, CategoryCreation, Color, DiscountCreation, DiscountModification,
    DiscountType, MovementCreation, MovementState, MovementType, OptionListModification,
    PackModification, TaxCreation, TaxModification,
};
use tactill::{
    query_filter, ApiKey, BaseUrl, ListParams, MutableResource, QueryOperator, Resource,
    RetryPolicy, TactillClient, TactillConfig, TactillError, TactillId,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const API_KEY: &str = "0123456789abcdef01234567";
const COMPANY_ID: &str = "5c2f8d1e9b0a7c3d4e5f6a71";
const SHOP_ID: &str = "5c2f8d1e9b0a7c3d4e5f6a73";
const NODE_ID: &str = "5c2f8d1e9b0a7c3d4e5f6a74";
const ARTICLE_ID: &str = "5e1f2a3b4c5d6e7f8a9b0c1d";
const CATEGORY_ID: &str = "5e1f2a3b4c5d6e7f8a9b0c20";
const TAX_ID: &str = "5e1f2a3b4c5d6e7f8a9b0c21";

async fn setup() -> (MockServer, TactillClient) {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/account/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "5c2f8d1e9b0a7c3d4e5f6a7b",
            "companies": [COMPANY_ID],
            "shops": [SHOP_ID],
            "nodes": [NODE_ID]
        })))
        .mount(&server)
        .await;

    let config = TactillConfig::builder()
        .api_key(ApiKey::new(API_KEY).unwrap())
        .base_url(BaseUrl::new(format!("{}/v1", server.uri())).unwrap())
        .timeout(Duration::from_secs(5))
        .retry_policy(RetryPolicy::none())
        .build()
        .unwrap();
    let client = TactillClient::with_config(config).await.unwrap();

    (server, client)
}

fn id(value: &str) -> TactillId {
    TactillId::new(value).unwrap()
}

fn article_json(name: &str, stock_quantity: f64, version: i64) -> serde_json::Value {
    json!({
        "_id": ARTICLE_ID,
        "__v": version,
        "deprecated": false,
        "node_id": NODE_ID,
        "category_id": CATEGORY_ID,
        "taxes": [TAX_ID],
        "name": name,
        "full_price": 1.5,
        "stock_quantity": stock_quantity,
        "created_at": "2024-01-01T08:00:00.000Z",
        "updated_at": format!("2024-01-0{}T08:00:00.000Z", version + 1)
    })
}

fn ack(message: &str) -> serde_json::Value {
    json!({"statusCode": 200, "error": "", "message": message})
}

async fn last_request(server: &MockServer, request_path: &str) -> Request {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.url.path() == request_path)
        .last()
        .unwrap()
}

fn query_keys(request: &Request) -> Vec<String> {
    request
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect()
}

// ============================================================================
// List Query Shaping
// ============================================================================

#[tokio::test]
async fn test_list_sends_scope_and_default_limit_only() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/catalog/articles"))
        .and(query_param("node_id", NODE_ID))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            article_json("Espresso", 10.0, 0)
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let articles = client.get_articles(&ListParams::new()).await.unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].name.as_deref(), Some("Espresso"));

    let request = last_request(&server, "/v1/catalog/articles").await;
    assert_eq!(query_keys(&request), vec!["node_id", "limit"]);
}

#[tokio::test]
async fn test_list_passes_skip_filter_and_order_verbatim() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/catalog/categories"))
        .and(query_param("company_id", COMPANY_ID))
        .and(query_param("limit", "2"))
        .and(query_param("skip", "1"))
        .and(query_param("filter", "name[in]=Boissons&name[in]=Desserts"))
        .and(query_param("order", "name=ASC&created_at=DESC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListParams::new()
        .limit(2)
        .skip(1)
        .filter(query_filter("name", &["Boissons", "Desserts"], QueryOperator::In))
        .order("name=ASC&created_at=DESC");

    let categories = client.get_categories(&params).await.unwrap();
    assert!(categories.is_empty());
}

#[tokio::test]
async fn test_each_resource_lists_with_its_own_scope() {
    let (server, client) = setup().await;

    for (resource_path, scope_key, scope_id) in [
        ("/v1/catalog/taxes", "company_id", COMPANY_ID),
        ("/v1/catalog/discounts", "shop_id", SHOP_ID),
        ("/v1/catalog/option_lists", "node_id", NODE_ID),
        ("/v1/catalog/options", "node_id", NODE_ID),
        ("/v1/catalog/packs", "node_id", NODE_ID),
        ("/v1/stock/movements", "shop_id", SHOP_ID),
    ] {
        Mock::given(method("GET"))
            .and(path(resource_path))
            .and(query_param(scope_key, scope_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
    }

    let params = ListParams::new();
    assert!(client.get_taxes(&params).await.unwrap().is_empty());
    assert!(client.get_discounts(&params).await.unwrap().is_empty());
    assert!(client.get_option_lists(&params).await.unwrap().is_empty());
    assert!(client.get_options(&params).await.unwrap().is_empty());
    assert!(client.get_packs(&params).await.unwrap().is_empty());
    assert!(client.get_movements(&params).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_filter_surfaces_server_validation_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/catalog/taxes"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "statusCode": 400,
            "error": "Bad Request",
            "message": "\"filter\" is invalid",
            "validation": {"source": "query", "keys": ["filter"]}
        })))
        .mount(&server)
        .await;

    let error = client
        .get_taxes(&ListParams::new().filter("rate=>=<"))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(400));
    let validation = error.envelope().unwrap().validation.clone().unwrap();
    assert_eq!(validation.source, "query");
    assert_eq!(validation.keys, vec!["filter"]);
}

#[tokio::test]
async fn test_list_with_unexpected_shape_is_a_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/catalog/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"articles": []})))
        .mount(&server)
        .await;

    let error = client.get_articles(&ListParams::new()).await.unwrap_err();
    assert!(matches!(
        error,
        TactillError::Decode {
            resource: "Article",
            ..
        }
    ));
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_injects_scope_and_omits_unset_fields() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/catalog/articles"))
        .and(body_json(json!({
            "name": "Espresso",
            "category_id": CATEGORY_ID,
            "taxes": [TAX_ID],
            "color": "#A06E58",
            "node_id": NODE_ID
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(article_json("Espresso", 0.0, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let creation = ArticleCreation {
        color: Some(Color::Brown),
        ..ArticleCreation::new("Espresso", CATEGORY_ID, &[TAX_ID]).unwrap()
    };
    let article = client.create_article(&creation).await.unwrap();

    assert_eq!(article.meta.id.as_ref(), ARTICLE_ID);
    assert_eq!(article.node_id.as_ref(), NODE_ID);
    assert_eq!(article.name.as_deref(), Some(creation.name.as_str()));
    assert!(article.meta.created_at.is_some());
}

#[tokio::test]
async fn test_create_uses_company_and_shop_scopes() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/catalog/taxes"))
        .and(body_json(json!({
            "name": "TVA 20%",
            "rate": 20.0,
            "is_default": false,
            "in_price": true,
            "company_id": COMPANY_ID
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": TAX_ID,
            "__v": 0,
            "company_id": COMPANY_ID,
            "name": "TVA 20%",
            "rate": 20.0,
            "is_default": false,
            "in_price": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/catalog/discounts"))
        .and(body_json(json!({
            "name": "Happy hour",
            "rate": 15.0,
            "type": "rate",
            "shop_id": SHOP_ID
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "5e1f2a3b4c5d6e7f8a9b0c30",
            "shop_id": SHOP_ID,
            "name": "Happy hour",
            "rate": 15.0,
            "type": "rate"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tax = client
        .create_tax(&TaxCreation::new("TVA 20%", 20.0))
        .await
        .unwrap();
    assert_eq!(tax.company_id.as_ref(), COMPANY_ID);

    let discount = client
        .create_discount(&DiscountCreation {
            rate: Some(15.0),
            discount_type: Some(DiscountType::Rate),
            ..DiscountCreation::new("Happy hour")
        })
        .await
        .unwrap();
    assert_eq!(discount.shop_id.as_ref(), SHOP_ID);
}

#[tokio::test]
async fn test_create_expects_created_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/catalog/options"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "5e1f2a3b4c5d6e7f8a9b0c40",
            "node_id": NODE_ID,
            "name": "Vanille",
            "price": 0.5
        })))
        .mount(&server)
        .await;

    let error = client
        .create_option(&CatalogOptionCreation::new("Vanille", 0.5))
        .await
        .unwrap_err();

    assert!(matches!(error, TactillError::Response(_)));
    assert_eq!(error.status(), Some(200));
}

#[tokio::test]
async fn test_create_with_empty_name_reports_name_field() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/catalog/categories"))
        .and(body_json(json!({"name": "", "company_id": COMPANY_ID})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "statusCode": 400,
            "error": "Bad Request",
            "message": "child \"name\" fails because [\"name\" is not allowed to be empty]",
            "validation": {"source": "payload", "keys": ["name"]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let error = client
        .create_category(&CategoryCreation::new(""))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(400));
    let envelope = error.envelope().unwrap();
    assert_eq!(envelope.error, "Bad Request");
    assert_eq!(envelope.validation.as_ref().unwrap().keys, vec!["name"]);
}

// ============================================================================
// Read, Update and Delete
// ============================================================================

#[tokio::test]
async fn test_update_sends_only_set_fields_and_returns_acknowledgement() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(format!("/v1/catalog/articles/{ARTICLE_ID}")))
        .and(body_json(json!({"name": "Latte"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ack("Article updated")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/catalog/articles/{ARTICLE_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_json("Latte", 10.0, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let before: Article = serde_json::from_value(article_json("Espresso", 10.0, 0)).unwrap();

    let modification = ArticleModification {
        name: Some("Latte".to_string()),
        ..Default::default()
    };
    let acknowledgement = client
        .update_article(&id(ARTICLE_ID), &modification)
        .await
        .unwrap();
    assert_eq!(acknowledgement.status_code, 200);
    assert_eq!(acknowledgement.message, "Article updated");

    let after = client.get_article(&id(ARTICLE_ID)).await.unwrap();
    assert_eq!(after.name.as_deref(), Some("Latte"));
    assert_eq!(after.full_price, before.full_price);
    assert_eq!(after.taxes, before.taxes);
    assert_eq!(after.meta.version, before.meta.version + 1);
    assert_eq!(after.meta.created_at, before.meta.created_at);
    assert!(after.meta.updated_at > before.meta.updated_at);
}

#[tokio::test]
async fn test_update_bodies_for_every_mutable_resource() {
    let (server, client) = setup().await;
    let target = "5e1f2a3b4c5d6e7f8a9b0c50";

    for (resource_path, body) in [
        ("catalog/taxes", json!({"rate": 5.5})),
        ("catalog/discounts", json!({"type": "numeric"})),
        ("catalog/option_lists", json!({"multiple": true})),
        ("catalog/packs", json!({"taxes": [TAX_ID]})),
    ] {
        Mock::given(method("PUT"))
            .and(path(format!("/v1/{resource_path}/{target}")))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(ack("updated")))
            .expect(1)
            .mount(&server)
            .await;
    }

    let target = id(target);
    client
        .update_tax(
            &target,
            &TaxModification {
                rate: Some(5.5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    client
        .update_discount(
            &target,
            &DiscountModification {
                discount_type: Some(DiscountType::Numeric),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    client
        .update_option_list(
            &target,
            &OptionListModification {
                multiple: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    client
        .update_pack(
            &target,
            &PackModification {
                taxes: Some(vec![id(TAX_ID)]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let (server, client) = setup().await;
    let item_path = format!("/v1/catalog/categories/{CATEGORY_ID}");

    Mock::given(method("DELETE"))
        .and(path(item_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(ack("Category deleted")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(item_path.as_str()))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "error": "Not Found",
            "message": "\"category_id\" specified in \"params\" could not be found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let acknowledgement = client.delete_category(&id(CATEGORY_ID)).await.unwrap();
    assert_eq!(acknowledgement.message, "Category deleted");

    let error = client.get_category(&id(CATEGORY_ID)).await.unwrap_err();
    assert!(error.is_not_found());
    assert_eq!(error.envelope().unwrap().error, "Not Found");
}

#[tokio::test]
async fn test_malformed_error_body_keeps_raw_text() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/catalog/packs/{ARTICLE_ID}")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let error = client.get_pack(&id(ARTICLE_ID)).await.unwrap_err();

    assert!(error.envelope().is_none());
    let response = error.response().unwrap();
    assert_eq!(response.code, 502);
    assert_eq!(response.body, "<html>Bad Gateway</html>");
    assert!(error.to_string().contains("Bad Gateway"));
}

#[tokio::test]
async fn test_trait_operations_match_client_methods() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/v1/catalog/options/{ARTICLE_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(ack("Option deleted")))
        .expect(1)
        .mount(&server)
        .await;

    let acknowledgement = CatalogOption::delete(&client, &id(ARTICLE_ID))
        .await
        .unwrap();
    assert_eq!(acknowledgement.message, "Option deleted");
    assert_eq!(CatalogOption::PATH, "catalog/options");
}

// ============================================================================
// Stock Movements
// ============================================================================

async fn mount_article_stock(server: &MockServer, first: f64, second: f64) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/catalog/articles/{ARTICLE_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_json("Espresso", first, 0)))
        .up_to_n_times(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/catalog/articles/{ARTICLE_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_json("Espresso", second, 0)))
        .mount(server)
        .await;
}

fn movement_response(movement_type: &str, units: f64) -> serde_json::Value {
    json!({
        "_id": "5e1f2a3b4c5d6e7f8a9b0c60",
        "__v": 0,
        "shop_id": SHOP_ID,
        "number": 1,
        "type": movement_type,
        "state": "done",
        "validated_by": [],
        "movements": [{
            "article_id": ARTICLE_ID,
            "article_name": "Espresso",
            "category_name": "Boissons",
            "state": "done",
            "units": units,
            "done_on": "2024-05-01T10:00:00.000Z"
        }]
    })
}

#[tokio::test]
async fn test_movement_in_increases_stock() {
    let (server, client) = setup().await;
    mount_article_stock(&server, 10.0, 22.0).await;

    Mock::given(method("POST"))
        .and(path("/v1/stock/movements"))
        .respond_with(ResponseTemplate::new(201).set_body_json(movement_response("in", 12.0)))
        .expect(1)
        .mount(&server)
        .await;

    let before = client.get_article(&id(ARTICLE_ID)).await.unwrap();

    let line = ArticleMovement::new(&id(ARTICLE_ID), "Espresso", "Boissons", 12.0);
    let creation = MovementCreation::new(MovementType::In, MovementState::Done, vec![line]);
    let movement = client.create_movement(&creation).await.unwrap();

    let after = client.get_article(&id(ARTICLE_ID)).await.unwrap();
    assert_eq!(movement.movement_type, Some(MovementType::In));
    assert!((after.stock_quantity - before.stock_quantity - 12.0).abs() < f64::EPSILON);

    let request = last_request(&server, "/v1/stock/movements").await;
    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body["shop_id"], SHOP_ID);
    assert_eq!(body["type"], "in");
    assert_eq!(body["movements"][0]["units"], 12.0);
    assert!(body["movements"][0]["done_on"].is_string());
    assert!(body.get("motive").is_none());
}

#[tokio::test]
async fn test_movement_out_decreases_stock() {
    let (server, client) = setup().await;
    mount_article_stock(&server, 10.0, 7.0).await;

    Mock::given(method("POST"))
        .and(path("/v1/stock/movements"))
        .respond_with(ResponseTemplate::new(201).set_body_json(movement_response("out", 3.0)))
        .expect(1)
        .mount(&server)
        .await;

    let before = client.get_article(&id(ARTICLE_ID)).await.unwrap();

    let line = ArticleMovement::new(&id(ARTICLE_ID), "Espresso", "Boissons", 3.0);
    let creation = MovementCreation::new(MovementType::Out, MovementState::Done, vec![line]);
    let movement = client.create_movement(&creation).await.unwrap();

    let after = client.get_article(&id(ARTICLE_ID)).await.unwrap();
    let moved = movement.movements.unwrap()[0].units;
    assert!(
        (after.stock_quantity
            - (before.stock_quantity + f64::from(MovementType::Out.sign()) * moved))
            .abs()
            < f64::EPSILON
    );
}
